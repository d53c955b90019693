//! Loads the reference mazes under `mazes/` together with the expected outcome of each search
//! strategy, as listed in `mazes/scenarios.csv`.
use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::{self, File};
use std::path::Path;
use walkdir::WalkDir;

const MAZE_DIR: &str = "mazes/";
const SCENARIO_FILE: &str = "mazes/scenarios.csv";

/// Expected result of solving a maze with one strategy.
#[derive(Clone, Debug, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Short strategy name, `dfs` or `bfs`.
    pub strategy: String,
    pub path_length: usize,
    pub num_explored: usize,
}

fn load_scenarios(name: &str) -> Vec<Scenario> {
    let file = File::open(Path::new(SCENARIO_FILE)).expect("Could not open scenario file");
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(file);
    csv_reader
        .deserialize::<Scenario>()
        .map(|result| result.expect("Could not parse scenario record"))
        .filter(|scenario| scenario.name == name)
        .collect()
}

/// Names of all `.txt` mazes, without extension.
pub fn get_benchmark_names() -> Vec<String> {
    let root = Path::new(MAZE_DIR)
        .canonicalize()
        .expect("Failed to canonicalize maze directory");
    let mut names = Vec::new();
    for entry in WalkDir::new(&root).min_depth(1).sort_by_file_name() {
        let entry = entry.expect("Could not get dir entry");
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "txt") {
            let name = path
                .strip_prefix(&root)
                .expect("Entry outside of maze directory")
                .with_extension("");
            names.push(name.to_string_lossy().into_owned());
        }
    }
    names
}

/// The maze text and its scenarios.
pub fn get_benchmark(name: &str) -> (String, Vec<Scenario>) {
    if !get_benchmark_names().iter().any(|n| n == name) {
        panic!("Could not load benchmark {}!", name);
    }
    let maze_str = fs::read_to_string(Path::new(MAZE_DIR).join(format!("{}.txt", name)))
        .expect("Could not read maze file");
    (maze_str, load_scenarios(name))
}
