use std::io::{BufRead, BufReader, BufWriter, Write};

/// Opens `stdin`, a plain file, or a `.gz` file for buffered reading.
///
/// ```
/// use std::io::BufRead;
/// let reader = nwa::reader("tests/nwa/test_seq1.fa");
/// let mut lines = vec![];
/// for line in reader.lines() {
///     lines.push(line);
/// }
/// assert_eq!(lines.len(), 2);
///
/// let reader = nwa::reader("tests/nwa/test_seq2.fa.gz");
/// assert_eq!(reader.lines().collect::<Vec<_>>().len(), 2);
/// ```
pub fn reader(input: &str) -> Box<dyn BufRead> {
    if input == "stdin" {
        return Box::new(BufReader::new(std::io::stdin()));
    }

    let path = std::path::Path::new(input);
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(why) => panic!("could not open {}: {}", path.display(), why),
    };

    if path.extension() == Some(std::ffi::OsStr::new("gz")) {
        Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

/// Opens `stdout` or creates a file for buffered writing.
pub fn writer(output: &str) -> Box<dyn Write> {
    if output == "stdout" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        Box::new(BufWriter::new(std::fs::File::create(output).unwrap()))
    }
}
