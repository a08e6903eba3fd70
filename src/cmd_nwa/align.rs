use clap::*;
use std::io::Write;

use nwa::libs::fasta;
use nwa::libs::nw::{Aligner, SubMatrix};

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("align")
        .about("Aligns two FASTA sequences end to end")
        .after_help(
            r###"
This command reads the first record of each input FASTA file and aligns the
two sequences globally (Needleman-Wunsch) with affine gap penalties. A gap
of length L costs `gap-open + L * gap-extend`.

Output is the alignment score followed by both gapped sequences as FASTA
records, with `-` marking gap columns.

Notes:
* Sequences are uppercased on reading
* --matrix takes a preset name (BLOSUM62, PAM250) or the path of an
  NCBI-format matrix file
* A symbol pair absent from the matrix aborts the alignment
* Inputs can be gzipped (.gz) or `stdin`

Examples:
1. Protein defaults (BLOSUM62, -10/-1):
   nwa align seq1.fa seq2.fa

2. Custom matrix and penalties:
   nwa align dna1.fa dna2.fa --matrix my.mat -g -16 -e -2

"###,
        )
        .arg(
            Arg::new("seqa")
                .required(true)
                .index(1)
                .help("Input FASTA file with the first sequence"),
        )
        .arg(
            Arg::new("seqb")
                .required(true)
                .index(2)
                .help("Input FASTA file with the second sequence"),
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
    let infile_a = args.get_one::<String>("seqa").unwrap();
    let infile_b = args.get_one::<String>("seqb").unwrap();

    let opt_matrix = args.get_one::<String>("matrix").unwrap();
    let opt_gap_open = *args.get_one::<f64>("gap_open").unwrap();
    let opt_gap_extend = *args.get_one::<f64>("gap_extend").unwrap();

    let mut writer = nwa::writer(args.get_one::<String>("outfile").unwrap());

    //----------------------------
    // Process
    //----------------------------
    let (name_a, seq_a) = fasta::read_one(infile_a)?;
    let (name_b, seq_b) = fasta::read_one(infile_b)?;

    let table = SubMatrix::from_name(opt_matrix)?;
    let mut aligner = Aligner::new(&table, opt_gap_open, opt_gap_extend)?;
    let (score, aligned_a, aligned_b) = aligner.align(&seq_a, &seq_b)?;

    //----------------------------
    // Output
    //----------------------------
    writer.write_fmt(format_args!("# score: {}\n", score))?;
    writer.write_fmt(format_args!(">{}\n{}\n", name_a, aligned_a))?;
    writer.write_fmt(format_args!(">{}\n{}\n", name_b, aligned_b))?;

    Ok(())
}
