use clap::{ErrorKind, Parser};
use log::info;
use mcisbench::graph::Graph;
use mcisbench::io::{edge_list, mapping_file};
use mcisbench::validate::validate;
use std::path::{Path, PathBuf};
use std::process::exit;

/// Check that a solver mapping is a valid induced common subgraph
/// isomorphism between two graphs.
#[derive(Parser, Debug)]
struct Opts {
    /// first graph, edge-list format
    g1: PathBuf,
    /// second graph, edge-list format
    g2: PathBuf,
    /// candidate mapping, `source → target` lines
    mapping: PathBuf,
}

// usage problems must exit 1 before any file is opened
fn parse_opts() -> Opts {
    Opts::try_parse().unwrap_or_else(|e| {
        let code = match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = e.print();
        exit(code)
    })
}

fn read_graph_or_exit(path: &Path) -> Graph<String> {
    match edge_list::parse_graph(path) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("cannot read graph {}: {}", path.display(), e);
            exit(1);
        }
    }
}

fn main() {
    env_logger::init();
    let opts = parse_opts();

    let g1 = read_graph_or_exit(&opts.g1);
    let g2 = read_graph_or_exit(&opts.g2);
    let mapping = match mapping_file::parse_mapping(&opts.mapping) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("cannot read mapping {}: {}", opts.mapping.display(), e);
            exit(1);
        }
    };
    info!("G1: {} vertices, {} edges", g1.n_vertices(), g1.n_edges());
    info!("G2: {} vertices, {} edges", g2.n_vertices(), g2.n_edges());
    info!("mapping: {} pairs", mapping.len());

    match validate(&g1, &g2, &mapping) {
        Ok(size) => {
            println!("the mapping is a valid induced common subgraph isomorphism");
            println!("common subgraph size: {}", size);
        }
        Err(e) => {
            println!("the mapping is not valid: {}", e);
            exit(1);
        }
    }
}
