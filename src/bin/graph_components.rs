use clap::{ErrorKind, Parser};
use mcisbench::components::component_sizes;
use mcisbench::io::edge_list;
use std::path::PathBuf;
use std::process::exit;

/// Connected components of an edge-list graph file (instance diagnostics).
#[derive(Parser, Debug)]
struct Opts {
    /// graph file
    graph: PathBuf,
}

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

fn main() {
    env_logger::init();
    let opts = parse_opts();

    let g = match edge_list::parse_graph(&opts.graph) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("cannot read graph {}: {}", opts.graph.display(), e);
            exit(1);
        }
    };
    let sizes = component_sizes(&g);

    println!("#vertices = {}", g.n_vertices());
    println!("#edges    = {}", g.n_edges());
    println!("#components = {}", sizes.len());
    println!();
    for (i, size) in sizes.iter().enumerate() {
        println!("component {}: size = {}", i, size);
    }
}
