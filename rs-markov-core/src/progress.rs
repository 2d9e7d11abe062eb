use std::io::Write;

/// Number of collected n-grams between two console refreshes.
pub const REPORT_EVERY: usize = 1000;

/// Observer notified while collecting or generating.
///
/// Implementations are purely observational: they never see the
/// data model and cannot alter counts or generated tokens.
pub trait Progress {
	/// Called once per emitted n-gram, `count` being the running total.
	fn ngram_collected(&mut self, _ngram_size: usize, _count: usize) {}

	/// Called once at the end of a generation run with the number of emitted tokens.
	fn tokens_generated(&mut self, _count: usize) {}

	/// Called once when the run is over.
	fn finish(&mut self) {}
}

/// Progress observer that reports nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl Progress for SilentProgress {}

/// Progress observer overwriting a single console line.
///
/// Write failures are ignored: progress output must never abort a run.
#[derive(Debug)]
pub struct ConsoleProgress<W: Write> {
	out: W,
	dirty: bool,
}

impl<W: Write> ConsoleProgress<W> {
	/// Reports on `out`.
	pub fn new(out: W) -> Self {
		Self { out, dirty: false }
	}

	/// Returns the underlying writer.
	pub fn into_inner(self) -> W {
		self.out
	}
}

impl<W: Write> Progress for ConsoleProgress<W> {
	fn ngram_collected(&mut self, ngram_size: usize, count: usize) {
		if count % REPORT_EVERY == 0 {
			// Overwrite the line to prevent console spam
			let _ = write!(self.out, "\r{}-grams collected: {}K ", ngram_size, count / REPORT_EVERY);
			let _ = self.out.flush();
			self.dirty = true;
		}
	}

	fn tokens_generated(&mut self, count: usize) {
		let _ = write!(self.out, "\rTokens generated: {} ", count);
		let _ = self.out.flush();
		self.dirty = true;
	}

	fn finish(&mut self) {
		if self.dirty {
			let _ = writeln!(self.out);
			let _ = self.out.flush();
			self.dirty = false;
		}
	}
}

/// Returns a console observer writing to `out`, or a silent one if `quiet` is set.
pub fn progress_for<'w, W: Write + 'w>(quiet: bool, out: W) -> Box<dyn Progress + 'w> {
	if quiet {
		Box::new(SilentProgress)
	} else {
		Box::new(ConsoleProgress::new(out))
	}
}
