use std::io::{self, IsTerminal, Write};

/// Flux de sortie d'un spinner live.
///
/// Implémenté par : `Stdout`, `Stderr`, et les buffers de test.
///
/// The driver moves the stream into its worker thread, hence `Send + 'static`.
/// `is_tty` decides between animated rendering and the plain-text fallback.
///
/// # Example
/// ```
/// use ua_core::traits::TermStream;
/// use std::io::Write;
///
/// struct Sink(Vec<u8>);
/// impl Write for Sink {
///     fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> { self.0.write(buf) }
///     fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
/// }
/// impl TermStream for Sink {
///     fn is_tty(&self) -> bool { false }
/// }
/// ```
pub trait TermStream: Write + Send + 'static {
    /// `true` si le flux est un terminal interactif.
    fn is_tty(&self) -> bool;
}

impl TermStream for io::Stdout {
    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}

impl TermStream for io::Stderr {
    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}
