use std::convert::TryFrom;
use std::fs::{File, OpenOptions};
use std::io;
use std::io::{stdin, stdout, BufReader};
use std::path::PathBuf;
use structopt::StructOpt;
use wugraph::generate::random_graph;
use wugraph::io::{EdgeListReader, EdgeListWriter};
use wugraph::WUGraph;

#[cfg(not(target_env = "msvc"))]
use jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "wugraph-cli",
    about = "Reads a weighted undirected graph and writes it back as an edge list."
)]
struct Opt {
    /// Input file in the `p wug` edge list format. `stdin` if not specified.
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Output file. `stdout` if not specified.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Log more, repeat for debug and trace output.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u64,

    /// Write edges in ascending weight order, ready for Kruskal's algorithm.
    #[structopt(short, long)]
    sorted: bool,

    /// Report vertex, edge and degree statistics on stderr.
    #[structopt(long)]
    stats: bool,

    /// Generate a random graph with this many vertices instead of reading one.
    #[structopt(long, conflicts_with = "input")]
    random: Option<usize>,

    /// Edge probability of the random graph.
    #[structopt(long, default_value = "0.1")]
    density: f64,

    /// Largest edge weight of the random graph.
    #[structopt(long, default_value = "100")]
    max_weight: i32,

    /// Seed of the random graph.
    #[structopt(long, default_value = "0")]
    seed: u64,
}

fn stats(graph: &WUGraph<usize>) -> Vec<String> {
    let mut lines = vec![
        format!("vertices: {}", graph.vertex_count()),
        format!("edges: {}", graph.edge_count()),
    ];
    let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
    if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
        let avg = degrees.iter().sum::<usize>() as f64 / degrees.len() as f64;
        lines.push(format!("degree: min {} max {} avg {:.2}", min, max, avg));
    }
    lines
}

fn report_stats(graph: &WUGraph<usize>) {
    for line in stats(graph) {
        #[cfg(feature = "logging")]
        log::info!("{}", line);
        #[cfg(not(feature = "logging"))]
        eprintln!("c {}", line);
    }
}

fn main() -> io::Result<()> {
    let opt = Opt::from_args();

    // --stats reports at info level, so it must not be filtered out
    #[cfg(feature = "logging")]
    wugraph::logging::init_cli_logger(opt.verbose.max(opt.stats as u64));

    let graph: WUGraph<usize> = match (opt.random, opt.input) {
        (Some(order), _) => random_graph(order, opt.density, opt.max_weight, opt.seed),
        (None, Some(path)) => {
            let file = File::open(path)?;
            let reader = EdgeListReader(BufReader::new(file));
            WUGraph::try_from(reader)?
        }
        (None, None) => {
            let stdin = stdin();
            let reader = EdgeListReader(stdin.lock());
            WUGraph::try_from(reader)?
        }
    };

    if opt.stats {
        report_stats(&graph);
    }

    match opt.output {
        Some(path) => {
            let writer = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            EdgeListWriter::new(&graph, io::BufWriter::new(writer))
                .sorted(opt.sorted)
                .output()
        }
        None => {
            let stdout = stdout();
            EdgeListWriter::new(&graph, stdout.lock())
                .sorted(opt.sorted)
                .output()
        }
    }
}
