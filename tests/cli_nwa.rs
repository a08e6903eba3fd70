use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn command_invalid() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    cmd.arg("foobar");
    cmd.assert().failure();

    Ok(())
}

#[test]
fn command_align() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("align")
        .arg("tests/nwa/test_seq1.fa")
        .arg("tests/nwa/test_seq2.fa")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.contains("# score: 17\n"));
    assert!(stdout.contains(">test_seq1\nMAVHQLIRRP\n"));
    assert!(stdout.contains(">test_seq2\nM---QLIRHP\n"));

    Ok(())
}

#[test]
fn command_align_gz() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("align")
        .arg("tests/nwa/test_seq1.fa")
        .arg("tests/nwa/test_seq2.fa.gz")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# score: 17\n"));
    assert!(stdout.contains("M---QLIRHP"));

    Ok(())
}

#[test]
fn command_align_outfile() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let outfile = temp.path().join("out.fa");

    let mut cmd = Command::cargo_bin("nwa")?;
    cmd.arg("align")
        .arg("tests/nwa/test_seq1.fa")
        .arg("tests/nwa/test_seq2.fa")
        .arg("-o")
        .arg(&outfile);
    cmd.assert().success();

    let content = fs::read_to_string(&outfile)?;
    assert!(content.contains("# score: 17"));
    assert!(content.contains(">test_seq2"));

    Ok(())
}

#[test]
fn command_align_matrix_file() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("align")
        .arg("tests/nwa/dna1.fa")
        .arg("tests/nwa/dna2.fa")
        .arg("--matrix")
        .arg("tests/nwa/toy.mat")
        .output()?;

    // 4 matches plus one run of 4 gaps: 20 - (10 + 4)
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# score: 6\n"));

    Ok(())
}

#[test]
fn command_align_pam250() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("align")
        .arg("tests/nwa/test_seq1.fa")
        .arg("tests/nwa/test_seq2.fa")
        .arg("--matrix")
        .arg("PAM250")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# score: "));
    assert!(stdout.contains(">test_seq1"));

    Ok(())
}

#[test]
fn command_align_penalties() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let short = temp.path().join("m.fa");
    let query = temp.path().join("mk.fa");

    fs::write(&short, ">m\nM\n")?;
    fs::write(&query, ">mk\nMK\n")?;

    // M-M match plus a single-gap run: 5 + gap_open + gap_extend
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd.arg("align").arg(&short).arg(&query).output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# score: -6\n"));
    assert!(stdout.contains(">m\nM-\n"));

    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("align")
        .arg(&short)
        .arg(&query)
        .arg("-g")
        .arg("-3")
        .arg("-e")
        .arg("-2")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("# score: 0\n"));

    Ok(())
}

#[test]
fn command_align_missing_symbol() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let input = temp.path().join("odd.fa");
    fs::write(&input, ">odd\nMJ\n")?;

    let mut cmd = Command::cargo_bin("nwa")?;
    cmd.arg("align").arg(&input).arg("tests/nwa/test_seq2.fa");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found in the substitution matrix"));

    Ok(())
}

#[test]
fn command_align_bad_penalty() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    cmd.arg("align")
        .arg("tests/nwa/test_seq1.fa")
        .arg("tests/nwa/test_seq2.fa")
        .arg("-g")
        .arg("10");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("gap_open must be negative"));

    Ok(())
}

#[test]
fn command_rank() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("rank")
        .arg("tests/nwa/brd_ref.fa")
        .arg("tests/nwa/brd_whale.fa")
        .arg("tests/nwa/brd_chicken.fa")
        .arg("tests/nwa/brd_mouse.fa")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.starts_with("#rank\tname\tscore\n"));
    assert!(stdout.contains("1\tmouse\t14\n"));
    assert!(stdout.contains("2\tchicken\t9\n"));
    assert!(stdout.contains("3\twhale\t-2\n"));

    Ok(())
}

#[test]
fn command_rank_parallel() -> anyhow::Result<()> {
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("rank")
        .arg("tests/nwa/brd_ref.fa")
        .arg("tests/nwa/brd_mouse.fa")
        .arg("tests/nwa/brd_chicken.fa")
        .arg("tests/nwa/brd_whale.fa")
        .arg("-p")
        .arg("2")
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("1\tmouse\t14\n"));
    assert!(stdout.contains("3\twhale\t-2\n"));

    Ok(())
}

#[test]
fn command_rank_tie_order() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let alpha = temp.path().join("alpha.fa");
    let beta = temp.path().join("beta.fa");

    fs::write(&alpha, ">alpha\nMKV\n")?;
    fs::write(&beta, ">beta\nMKV\n")?;

    // Equal scores keep command-line order
    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("rank")
        .arg("tests/nwa/brd_ref.fa")
        .arg(&beta)
        .arg(&alpha)
        .output()?;

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("1\tbeta\t14\n"));
    assert!(stdout.contains("2\talpha\t14\n"));

    Ok(())
}

#[test]
fn command_rank_nan_score() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let matrix = temp.path().join("nan.mat");
    let reffile = temp.path().join("ref.fa");
    let q1 = temp.path().join("q1.fa");
    let q2 = temp.path().join("q2.fa");

    // A-A scores nan; q1 hits it, q2 does not. The ranking must still
    // come out, with the nan row placed by input order.
    fs::write(&matrix, "A C\nnan -1\n-1 5\n")?;
    fs::write(&reffile, ">ref\nA\n")?;
    fs::write(&q1, ">q1\nA\n")?;
    fs::write(&q2, ">q2\nC\n")?;

    let mut cmd = Command::cargo_bin("nwa")?;
    let output = cmd
        .arg("rank")
        .arg(&reffile)
        .arg(&q1)
        .arg(&q2)
        .arg("-m")
        .arg(&matrix)
        .output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.contains("1\tq1\tNaN\n"));
    assert!(stdout.contains("2\tq2\t-1\n"));

    Ok(())
}

#[test]
fn command_rank_outfile() -> anyhow::Result<()> {
    let temp = TempDir::new()?;
    let outfile = temp.path().join("rank.tsv");

    let mut cmd = Command::cargo_bin("nwa")?;
    cmd.arg("rank")
        .arg("tests/nwa/brd_ref.fa")
        .arg("tests/nwa/brd_mouse.fa")
        .arg("-o")
        .arg(&outfile);
    cmd.assert().success();

    let content = fs::read_to_string(&outfile)?;
    assert!(content.starts_with("#rank\tname\tscore\n"));
    assert!(content.contains("1\tmouse\t14\n"));

    Ok(())
}
