use ua_core::color::AnsiColor;
use ua_core::spinner::Spinner;

/// Met en forme une frame pour l'affichage live.
///
/// Each line is wrapped in `color` when `colorize` is set (TTY only), and
/// `text` is appended to the first line, separated by one space. An empty
/// first line is replaced by `text` alone.
///
/// # Example
/// ```
/// use ua_core::color::AnsiColor;
/// use ua_live::render::format_frame;
///
/// assert_eq!(format_frame("⠋", "Loading", None, false), "⠋ Loading");
/// assert_eq!(
///     format_frame("⠋", "", Some(AnsiColor::Cyan), true),
///     "\x1b[36m⠋\x1b[0m"
/// );
/// ```
#[must_use]
pub fn format_frame(frame: &str, text: &str, color: Option<AnsiColor>, colorize: bool) -> String {
    let mut lines: Vec<String> = frame.lines().map(str::to_string).collect();
    if lines.is_empty() {
        lines.push(String::new());
    }
    if let Some(color) = color.filter(|_| colorize) {
        for line in &mut lines {
            *line = color.paint(line);
        }
    }
    if !text.is_empty() {
        if lines[0].is_empty() {
            text.clone_into(&mut lines[0]);
        } else {
            lines[0].push(' ');
            lines[0].push_str(text);
        }
    }
    lines.join("\n")
}

/// Nombre de lignes terminal occupées par un rendu (au moins 1).
#[inline]
#[must_use]
pub fn line_count(rendered: &str) -> usize {
    rendered.lines().count().max(1)
}

/// Centre `line` sur `width` caractères.
///
/// With odd padding, the extra space goes left when `width` is odd and right
/// when it is even. Lines already `width` wide or wider are returned as is.
///
/// # Example
/// ```
/// use ua_live::render::center;
/// assert_eq!(center("ab", 3), " ab");
/// assert_eq!(center("a", 2), "a ");
/// assert_eq!(center("a", 3), " a ");
/// ```
#[must_use]
pub fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    let pad = width - len;
    let left = pad / 2 + (pad & width & 1);
    format!("{}{line}{}", " ".repeat(left), " ".repeat(pad - left))
}

/// Mise en page des aperçus : étiquette, centrage, hauteur uniforme.
///
/// Every frame is centered to the widest frame and padded with blank lines to
/// the tallest, so the label never jumps between frames. Continuation lines
/// are indented by the label width.
///
/// # Example
/// ```
/// use ua_core::spinner::Spinner;
/// use ua_live::render::PreviewLayout;
///
/// let sp = Spinner::new(vec!["⠁⠁⠁".into(), "⠂".into()], 50).unwrap();
/// let layout = PreviewLayout::new("demo", &sp);
/// assert_eq!(layout.render(0, None), "  demo: ⠁⠁⠁");
/// assert_eq!(layout.render(1, None), "  demo:  ⠂ ");
/// ```
#[derive(Debug, Clone)]
pub struct PreviewLayout {
    label: String,
    frames: Vec<Vec<String>>,
    width: usize,
    height: usize,
}

impl PreviewLayout {
    /// Pré-calcule les lignes de chaque frame.
    #[must_use]
    pub fn new(name: &str, spinner: &Spinner) -> Self {
        let (width, height) = spinner.extent();
        let frames = spinner
            .frames()
            .iter()
            .map(|f| f.lines().map(str::to_string).collect())
            .collect();
        Self {
            label: format!("  {name}: "),
            frames,
            width,
            height,
        }
    }

    /// Hauteur du rendu, en lignes.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rendu de la frame `index` (modulo le nombre de frames).
    #[must_use]
    pub fn render(&self, index: usize, color: Option<AnsiColor>) -> String {
        let lines = &self.frames[index % self.frames.len()];
        let indent = " ".repeat(self.label.chars().count());
        (0..self.height)
            .map(|i| {
                let line = lines.get(i).map_or("", String::as_str);
                let centered = center(line, self.width);
                let body = match color {
                    Some(c) => c.paint(&centered),
                    None => centered,
                };
                let prefix = if i == 0 { &self.label } else { &indent };
                format!("{prefix}{body}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_appended_to_first_line_only() {
        let out = format_frame("⠁⠂\n⠄⡀", "Working", None, true);
        assert_eq!(out, "⠁⠂ Working\n⠄⡀");
    }

    #[test]
    fn empty_frame_shows_text_alone() {
        assert_eq!(format_frame("", "Idle", None, false), "Idle");
        assert_eq!(format_frame("", "", None, false), "");
    }

    #[test]
    fn color_requires_tty() {
        let plain = format_frame("⠋", "x", Some(AnsiColor::Red), false);
        assert_eq!(plain, "⠋ x");
        let colored = format_frame("⠋\n⠙", "x", Some(AnsiColor::Red), true);
        assert_eq!(colored, "\x1b[31m⠋\x1b[0m x\n\x1b[31m⠙\x1b[0m");
    }

    #[test]
    fn line_count_never_zero() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\nb\nc"), 3);
    }

    #[test]
    fn preview_pads_short_frames() {
        let sp = Spinner::new(vec!["⠁⠁\n⠁⠁".into(), "⠂⠂".into()], 50).unwrap();
        let layout = PreviewLayout::new("x", &sp);
        assert_eq!(layout.height(), 2);
        assert_eq!(layout.render(0, None), "  x: ⠁⠁\n     ⠁⠁");
        assert_eq!(layout.render(1, None), "  x: ⠂⠂\n       ");
    }

    #[test]
    fn odd_width_puts_extra_padding_left() {
        let sp = Spinner::new(vec!["⠁⠁⠁".into(), "⠂⠂".into()], 50).unwrap();
        let layout = PreviewLayout::new("d", &sp);
        assert_eq!(layout.render(1, None), "  d:  ⠂⠂");
    }

    #[test]
    fn even_width_puts_extra_padding_right() {
        let sp = Spinner::new(vec!["⠁⠁⠁⠁".into(), "⠂".into()], 50).unwrap();
        let layout = PreviewLayout::new("d", &sp);
        assert_eq!(layout.render(1, None), "  d:  ⠂  ");
        assert_eq!(center("⠂⠂⠂⠂⠂", 4), "⠂⠂⠂⠂⠂");
    }

    #[test]
    fn preview_colors_each_line() {
        let sp = Spinner::new(vec!["⠁".into()], 50).unwrap();
        let layout = PreviewLayout::new("a", &sp);
        assert_eq!(
            layout.render(0, Some(AnsiColor::Green)),
            "  a: \x1b[32m⠁\x1b[0m"
        );
    }

    #[test]
    fn preview_index_wraps() {
        let sp = Spinner::new(vec!["⠁".into(), "⠂".into()], 50).unwrap();
        let layout = PreviewLayout::new("w", &sp);
        assert_eq!(layout.render(3, None), layout.render(1, None));
    }
}
