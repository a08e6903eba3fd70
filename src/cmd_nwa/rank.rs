use clap::*;
use itertools::Itertools;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::io::Write;

use nwa::libs::fasta;
use nwa::libs::nw::{Aligner, SubMatrix};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("rank")
        .about("Ranks queries by alignment score against a reference")
        .after_help(
            r###"
This command aligns the first record of every query FASTA file to the
reference sequence and prints a TSV table sorted by score, best first.

Output columns:
1. rank: 1-based position in the ordering
2. name: FASTA record name of the query
3. score: global alignment score against the reference

Notes:
* Queries with equal scores keep their command-line order
* Alignments run in parallel with --parallel
* Matrix and penalty options match `nwa align`

Examples:
1. Rank orthologs against the human sequence:
   nwa rank human.fa mouse.fa chicken.fa whale.fa

2. Eight threads, PAM250:
   nwa rank human.fa queries/*.fa --matrix PAM250 -p 8

"###,
        )
        .arg(
            Arg::new("reffile")
                .required(true)
                .index(1)
                .help("Reference FASTA file"),
        )
        .arg(
            Arg::new("infiles")
                .required(true)
                .num_args(1..)
                .index(2)
                .help("Query FASTA file(s)"),
        )
        .arg(
            Arg::new("matrix")
                .long("matrix")
                .short('m')
                .num_args(1)
                .default_value("BLOSUM62")
                .help("Substitution matrix: preset name or file"),
        )
        .arg(
            Arg::new("gap_open")
                .long("gap-open")
                .short('g')
                .value_parser(value_parser!(f64))
                .default_value("-10")
                .allow_negative_numbers(true)
                .help("Gap opening penalty"),
        )
        .arg(
            Arg::new("gap_extend")
                .long("gap-extend")
                .short('e')
                .value_parser(value_parser!(f64))
                .default_value("-1")
                .allow_negative_numbers(true)
                .help("Gap extension penalty"),
        )
        .arg(
            Arg::new("parallel")
                .long("parallel")
                .short('p')
                .num_args(1)
                .default_value("1")
                .value_parser(value_parser!(usize))
                .help("Number of threads for parallel processing"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let reffile = args.get_one::<String>("reffile").unwrap();

    let opt_matrix = args.get_one::<String>("matrix").unwrap();
    let opt_gap_open = *args.get_one::<f64>("gap_open").unwrap();
    let opt_gap_extend = *args.get_one::<f64>("gap_extend").unwrap();

    // Set the number of threads for rayon
    let opt_parallel = *args.get_one::<usize>("parallel").unwrap();
    rayon::ThreadPoolBuilder::new()
        .num_threads(opt_parallel)
        .build_global()?;

    let mut writer = nwa::writer(args.get_one::<String>("outfile").unwrap());

    //----------------------------
    // Init
    //----------------------------
    let (_, ref_seq) = fasta::read_one(reffile)?;
    let table = SubMatrix::from_name(opt_matrix)?;

    let mut queries = vec![];
    for infile in args.get_many::<String>("infiles").unwrap() {
        queries.push(fasta::read_one(infile)?);
    }

    //----------------------------
    // Process
    //----------------------------
    let scores: Vec<f64> = queries
        .par_iter()
        .map(|(_, seq)| -> anyhow::Result<f64> {
            let mut aligner = Aligner::new(&table, opt_gap_open, opt_gap_extend)?;
            let (score, _, _) = aligner.align(&ref_seq, seq)?;
            Ok(score)
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    //----------------------------
    // Output
    //----------------------------
    // Stable descending sort, so equal scores keep input order
    writer.write_fmt(format_args!("#rank\tname\tscore\n"))?;
    for (rank, (idx, score)) in scores
        .iter()
        .enumerate()
        .sorted_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(Ordering::Equal))
        .enumerate()
    {
        writer.write_fmt(format_args!("{}\t{}\t{}\n", rank + 1, queries[idx].0, score))?;
    }

    Ok(())
}
