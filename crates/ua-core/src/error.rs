use thiserror::Error;

/// Invalid input detected before any work is done.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Grid dimensions that do not tile into whole 4×2 braille cells.
    #[error("Dimensions de grille invalides : {rows}×{cols} (lignes multiple de 4, colonnes multiple de 2)")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// Scale factor outside the supported set.
    #[error("Facteur d'échelle non supporté : {0} (valeurs acceptées : 2, 3)")]
    UnsupportedScale(u32),

    /// No spinner registered under this name.
    #[error("Spinner inconnu : {0}")]
    UnknownSpinner(String),

    /// Color name not in the ANSI palette.
    #[error("Couleur inconnue : {0}")]
    UnknownColor(String),

    /// Spinner with no frames or a zero interval.
    #[error("Spinner invalide : {0}")]
    InvalidSpinner(String),
}

/// Failure while decoding braille text back into a dot grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Character outside the braille block U+2800..=U+28FF.
    #[error("Caractère hors du bloc braille : {ch:?} (ligne {line}, colonne {column})")]
    NotBraille {
        /// Offending character.
        ch: char,
        /// Zero-based line index.
        line: usize,
        /// Zero-based character index within the line.
        column: usize,
    },

    /// Lines of unequal length.
    #[error("Bloc braille non rectangulaire : ligne {line} a {found} caractères, attendu {expected}")]
    RaggedBlock {
        /// Zero-based index of the first mismatching line.
        line: usize,
        /// Length of the first line.
        expected: usize,
        /// Length of the mismatching line.
        found: usize,
    },

    /// Nothing to decode.
    #[error("Bloc braille vide")]
    EmptyBlock,
}

/// Errors originating from the core codec and scaler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Validation failure.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Decode failure.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_wraps_both_kinds() {
        let v: CoreError = ValidationError::UnsupportedScale(5).into();
        assert!(matches!(v, CoreError::Validation(ValidationError::UnsupportedScale(5))));

        let d: CoreError = DecodeError::EmptyBlock.into();
        assert!(matches!(d, CoreError::Decode(DecodeError::EmptyBlock)));
    }

    #[test]
    fn messages_carry_the_offending_value() {
        let err = DecodeError::NotBraille { ch: 'a', line: 0, column: 3 };
        let msg = err.to_string();
        assert!(msg.contains("'a'"));
        assert!(msg.contains("colonne 3"));

        let err = ValidationError::UnknownSpinner("nope".into());
        assert!(err.to_string().contains("nope"));
    }
}
