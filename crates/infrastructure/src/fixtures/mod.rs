pub mod yaml_loader;

pub use yaml_loader::YamlFixtureLoader;
