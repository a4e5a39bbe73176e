//! Behavioural tests for catalog loading using rstest-bdd.

use std::cell::RefCell;

use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use roamwise_core::{Catalog, CatalogError};
use tempfile::TempDir;

const LISBON: &str = r#"{
  "destinations": [
    {
      "name": "Lisbon",
      "country": "Portugal",
      "region": "Europe",
      "location": {"lat": 38.7223, "lon": -9.1393},
      "concepts": ["culture-history", "foodie"],
      "best_months": [4, 5, 9, 10],
      "budget": "$$"
    }
  ]
}"#;

const UNKNOWN_CONCEPT: &str = r#"{
  "destinations": [
    {
      "name": "Zermatt",
      "country": "Switzerland",
      "region": "Europe",
      "location": {"lat": 46.0207, "lon": 7.7491},
      "concepts": ["skiing"],
      "budget": "high"
    }
  ]
}"#;

/// Shared state for catalog scenarios.
#[derive(Debug)]
struct CatalogWorld {
    temp_dir: TempDir,
    path: RefCell<Option<Utf8PathBuf>>,
    catalog: RefCell<Option<Catalog>>,
    error: RefCell<Option<CatalogError>>,
}

impl CatalogWorld {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
            path: RefCell::new(None),
            catalog: RefCell::new(None),
            error: RefCell::new(None),
        }
    }

    fn catalog_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.temp_dir.path().join("catalog.json"))
            .expect("utf-8 temp path")
    }

    fn write_catalog(&self, contents: &str) {
        let path = self.catalog_path();
        std::fs::write(&path, contents).expect("write catalog");
        self.path.replace(Some(path));
    }

    fn loaded(&self) -> std::cell::Ref<'_, Catalog> {
        assert!(
            self.error.borrow().is_none(),
            "unexpected catalog error: {:?}",
            self.error.borrow()
        );
        std::cell::Ref::map(self.catalog.borrow(), |catalog| {
            catalog.as_ref().expect("catalog should be loaded")
        })
    }
}

#[fixture]
fn world() -> CatalogWorld {
    CatalogWorld::new()
}

#[given("the bundled catalog")]
fn given_bundled(world: &CatalogWorld) {
    let catalog = Catalog::bundled().expect("bundled catalog parses");
    world.catalog.replace(Some(catalog));
}

#[given("a catalog file containing a single European destination")]
fn given_lisbon(world: &CatalogWorld) {
    world.write_catalog(LISBON);
}

#[given("a catalog path that does not exist")]
fn given_missing(world: &CatalogWorld) {
    world.path.replace(Some(world.catalog_path()));
}

#[given("a catalog file with an unknown concept")]
fn given_unknown_concept(world: &CatalogWorld) {
    world.write_catalog(UNKNOWN_CONCEPT);
}

#[when("I load the catalog file")]
fn load_catalog(world: &CatalogWorld) {
    let path = world
        .path
        .borrow()
        .clone()
        .expect("catalog path should be set");
    match Catalog::from_path(&path) {
        Ok(catalog) => {
            world.catalog.replace(Some(catalog));
            world.error.replace(None);
        }
        Err(err) => {
            world.catalog.replace(None);
            world.error.replace(Some(err));
        }
    }
}

#[then("the catalog holds 17 destinations")]
fn then_seventeen(world: &CatalogWorld) {
    assert_eq!(world.loaded().len(), 17);
}

#[then("the catalog holds one destination")]
fn then_one(world: &CatalogWorld) {
    let catalog = world.loaded();
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("Lisbon").is_some());
}

#[then("every destination has at least one concept")]
fn then_concepts(world: &CatalogWorld) {
    let catalog = world.loaded();
    assert!(catalog.iter().all(|destination| !destination.concepts.is_empty()));
}

#[then("the only region is Europe")]
fn then_europe(world: &CatalogWorld) {
    assert_eq!(world.loaded().regions(), vec!["Europe"]);
}

#[then("a catalog open error is returned")]
fn then_open_error(world: &CatalogWorld) {
    let binding = world.error.borrow();
    let error = binding.as_ref().expect("an error should be recorded");
    assert!(matches!(error, CatalogError::Open { .. }));
}

#[then("a catalog parse error is returned")]
fn then_parse_error(world: &CatalogWorld) {
    let binding = world.error.borrow();
    let error = binding.as_ref().expect("an error should be recorded");
    assert!(matches!(error, CatalogError::Parse { .. }));
}

#[scenario(path = "tests/features/catalog.feature", index = 0)]
fn bundled_catalog(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 1)]
fn catalog_file(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 2)]
fn missing_catalog_file(world: CatalogWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/catalog.feature", index = 3)]
fn unknown_concept(world: CatalogWorld) {
    let _ = world;
}
