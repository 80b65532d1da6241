use clap::{ErrorKind, Parser};
use log::info;
use mcisbench::graph::Graph;
use mcisbench::instances;
use mcisbench::mapping::Mapping;
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::exit;

/// Generate the benchmark suite: three graph pairs with known structural
/// relationships, their ground-truth mappings, and a manifest.
#[derive(Parser, Debug)]
struct Opts {
    /// output directory, created if absent
    #[clap(long, default_value = "mcis_instances")]
    outdir: PathBuf,
    /// random seed of the whole suite
    #[clap(long, default_value = "42")]
    seed: u64,
}

#[derive(Serialize)]
struct InstanceRecord {
    name: &'static str,
    g1: &'static str,
    g2: &'static str,
    truth: Option<&'static str>,
    params: serde_json::Value,
}

#[derive(Serialize)]
struct Manifest {
    seed: u64,
    instances: Vec<InstanceRecord>,
}

/// graph files never carry raw integer labels
fn labeled(g: &Graph<usize>) -> Graph<String> {
    g.relabel(|&u| format!("v{}", u))
}

fn labeled_mapping(m: &Mapping<usize>) -> Mapping<String> {
    m.relabel(|&u| format!("v{}", u))
}

fn run(opts: &Opts) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(&opts.outdir)?;
    let dir = &opts.outdir;
    let mut manifest = Manifest {
        seed: opts.seed,
        instances: Vec::new(),
    };

    info!("generating large isomorphic pair");
    let (g1, g2, truth) = instances::isomorphic_pair(1000, 0.4, opts.seed)?;
    labeled(&g1).to_edge_list_file(dir.join("iso_large_g1.txt"))?;
    labeled(&g2).to_edge_list_file(dir.join("iso_large_g2.txt"))?;
    labeled_mapping(&truth).to_mapping_file(dir.join("iso_large_truth.txt"))?;
    manifest.instances.push(InstanceRecord {
        name: "iso_large",
        g1: "iso_large_g1.txt",
        g2: "iso_large_g2.txt",
        truth: Some("iso_large_truth.txt"),
        params: json!({ "n": 1000, "p": 0.4 }),
    });

    info!("generating complete vs sparse pair");
    let (g1, g2) = instances::complete_vs_sparse(25, 60, 0.05, opts.seed)?;
    labeled(&g1).to_edge_list_file(dir.join("complete_g1.txt"))?;
    labeled(&g2).to_edge_list_file(dir.join("sparse_g2.txt"))?;
    manifest.instances.push(InstanceRecord {
        name: "complete_vs_sparse",
        g1: "complete_g1.txt",
        g2: "sparse_g2.txt",
        truth: None,
        params: json!({ "clique_size": 25, "sparse_size": 60, "p_sparse": 0.05 }),
    });

    info!("generating shared core with noise pair");
    let (g1, g2, truth) = instances::common_core_with_noise(40, 40, 60, 0.4, 0.1, opts.seed)?;
    labeled(&g1).to_edge_list_file(dir.join("core_noise_g1.txt"))?;
    labeled(&g2).to_edge_list_file(dir.join("core_noise_g2.txt"))?;
    labeled_mapping(&truth).to_mapping_file(dir.join("core_noise_truth.txt"))?;
    manifest.instances.push(InstanceRecord {
        name: "core_noise",
        g1: "core_noise_g1.txt",
        g2: "core_noise_g2.txt",
        truth: Some("core_noise_truth.txt"),
        params: json!({
            "core_size": 40,
            "extra1": 40,
            "extra2": 60,
            "p_core": 0.4,
            "p_noise": 0.1
        }),
    });

    serde_json::to_writer_pretty(File::create(dir.join("manifest.json"))?, &manifest)?;

    println!("generated {} instance pairs in {}", manifest.instances.len(), dir.display());
    Ok(())
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
    if let Err(e) = run(&opts) {
        eprintln!("generation failed: {}", e);
        exit(1);
    }
}
