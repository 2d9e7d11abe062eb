use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Path standing for standard input or standard output.
pub const STDIO_PATH: &str = "-";

/// Whether `path` stands for a standard stream.
pub fn is_stdio<P: AsRef<Path>>(path: P) -> bool {
	path.as_ref() == Path::new(STDIO_PATH)
}

/// Reads a whole text source into memory.
///
/// `-` reads standard input, any other path is opened as a file.
pub fn read_text<P: AsRef<Path>>(path: P) -> io::Result<String> {
	let mut contents = String::new();
	if is_stdio(&path) {
		io::stdin().lock().read_to_string(&mut contents)?;
	} else {
		File::open(path)?.read_to_string(&mut contents)?;
	}
	Ok(contents)
}

/// Reads a whole byte source into memory (`-` for standard input).
pub fn read_bytes<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
	let mut contents = Vec::new();
	if is_stdio(&path) {
		io::stdin().lock().read_to_end(&mut contents)?;
	} else {
		File::open(path)?.read_to_end(&mut contents)?;
	}
	Ok(contents)
}

/// Splits text on whitespace, across line boundaries.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
	text.split_whitespace()
}

/// Reads every source in order and returns one continuous token stream.
///
/// Tokens of consecutive sources follow each other without a break, so
/// n-grams may span two files.
pub fn read_tokens<P: AsRef<Path>>(paths: &[P]) -> io::Result<Vec<String>> {
	let mut tokens = Vec::new();
	for path in paths {
		let text = read_text(path)?;
		tokens.extend(tokenize(&text).map(str::to_owned));
	}
	Ok(tokens)
}

/// Opens a text or byte sink: a new file or, for `-`, standard output.
pub fn create_output<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn Write>> {
	if is_stdio(&path) {
		Ok(Box::new(io::stdout().lock()))
	} else {
		Ok(Box::new(BufWriter::new(File::create(path)?)))
	}
}

/// Writes `data` once to a file or, for `-`, to standard output.
pub fn write_bytes<P: AsRef<Path>>(path: P, data: &[u8]) -> io::Result<()> {
	let mut out = create_output(path)?;
	out.write_all(data)?;
	out.flush()
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `data/corpus.txt` + `"bin"` → `data/corpus.bin`
pub fn build_output_path<P: AsRef<Path>>(
	input_path: P,
	output_extension: &str,
) -> io::Result<PathBuf> {
	let input_path = input_path.as_ref();
	if is_stdio(input_path) {
		return Err(io::Error::new(io::ErrorKind::InvalidInput, "Cannot derive an output path from stdin"));
	}

	let parent = input_path.parent().unwrap_or_else(|| Path::new("."));
	let file_stem = input_path
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Input path has no filename"))?;

	let mut output = PathBuf::from(parent);
	output.push(file_stem);
	output.set_extension(output_extension);

	Ok(output)
}
