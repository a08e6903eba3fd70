extern crate clap;
use clap::*;

mod cmd_nwa;

fn main() -> anyhow::Result<()> {
    let app = Command::new("nwa")
        .version(crate_version!())
        .about("`nwa` - Needleman-Wunsch global Alignment")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_nwa::align::make_subcommand())
        .subcommand(cmd_nwa::rank::make_subcommand())
        .after_help(
            r###"Subcommands:

* align - Global alignment of two sequences, gapped output
* rank  - Order many queries by alignment score to a reference

Substitution matrices:
* Presets: BLOSUM62 (default), PAM250
* Or any NCBI-format square matrix file

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("align", sub_matches)) => cmd_nwa::align::execute(sub_matches),
        Some(("rank", sub_matches)) => cmd_nwa::rank::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
