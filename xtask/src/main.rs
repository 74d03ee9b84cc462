use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ghostwalk::graph::{self, write_order, GraphDocument};
use ghostwalk::{GhostToken, TraversalConfig};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "ghostwalk workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Traverse a graph document and print the visit order
    Walk {
        /// JSON graph document (`matrix` or `edges`)
        #[arg(long)]
        graph: PathBuf,

        /// Traversal to run
        #[arg(long, value_enum)]
        algorithm: Algorithm,

        /// Start vertex for bfs/dfs
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// Override the vertex limit
        #[arg(long)]
        max_vertices: Option<usize>,

        /// Override the queue capacity
        #[arg(long)]
        queue_capacity: Option<usize>,
    },
    /// Run the criterion benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Bfs,
    Dfs,
    Topo,
}

const BENCHES: &[&str] = &["traversal_benchmark", "topo_benchmark"];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Walk { graph, algorithm, start, max_vertices, queue_capacity } => {
            walk(&graph, algorithm, start, max_vertices, queue_capacity)?;
        }
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn walk(
    path: &Path,
    algorithm: Algorithm,
    start: usize,
    max_vertices: Option<usize>,
    queue_capacity: Option<usize>,
) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let document = GraphDocument::from_json(&text).with_context(|| format!("Failed to parse {}", path.display()))?;

    let mut config = document.effective_config(&TraversalConfig::default());
    if let Some(max) = max_vertices {
        config = config.with_max_vertices(max);
    }
    if let Some(capacity) = queue_capacity {
        config = config.with_queue_capacity(capacity);
    }
    // Flags win over the document's own limits.
    let document = GraphDocument { config: Some(config), ..document };

    GhostToken::new(|token| {
        let g = document.build(&config).context("Invalid graph document")?;
        info!(vertices = g.vertex_count(), edges = g.edge_count(&token), "graph loaded");

        let order = match algorithm {
            Algorithm::Bfs => graph::bfs(&g, &token, start)?,
            Algorithm::Dfs => graph::dfs(&g, &token, start)?,
            Algorithm::Topo => {
                let topo = graph::topological_sort(&g, &token)?;
                if !topo.is_complete() {
                    warn!(unsorted = ?topo.unsorted(), "graph has a cycle");
                    print_order(topo.as_slice())?;
                    anyhow::bail!(
                        "topological order is incomplete: {} of {} vertices emitted",
                        topo.emitted(),
                        topo.vertex_count()
                    );
                }
                topo.order().clone()
            }
        };

        print_order(order.as_slice())
    })
}

fn print_order(order: &[usize]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_order(&mut out, order).context("Failed to write order")?;
    out.flush()?;
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running benchmarks...");

    for bench in BENCHES {
        println!("\n>>> {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(bench);

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd.status().with_context(|| format!("Failed to run bench {}", bench))?;

        if status.success() {
            println!("Finished {} in {:.2?}", bench, start.elapsed());
        } else {
            eprintln!("Warning: Benchmark {} failed", bench);
        }
    }

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results);

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)?;

    writeln!(file, "# Traversal Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean |")?;
    writeln!(file, "|---|---|")?;
    for (name, time_ns) in &results {
        writeln!(file, "| {} | {} |", name, format_ns(*time_ns))?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ns(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{:.0} ns", ns)
    }
}

// Criterion layout: <root>/<group>/<id>/new/estimates.json
fn collect_results(root: &Path, dir: &Path, results: &mut BTreeMap<String, f64>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(root, &path, results);
            continue;
        }
        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };
        let Ok(name) = bench_dir.strip_prefix(root) else { continue };

        let mean = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|json| json.get("mean")?.get("point_estimate")?.as_f64());
        if let Some(time_ns) = mean {
            results.insert(name.display().to_string(), time_ns);
        }
    }
}
