use std::fmt;

use super::ByteMatrix;
use crate::error::EncodeError;

/// Data encoding mode of a QR symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Not yet assigned by the encoder
    #[default]
    Undefined,
    /// Digits 0-9
    Numeric,
    /// Digits, uppercase letters and nine punctuation characters
    Alphanumeric,
    /// Arbitrary 8-bit bytes
    EightBitByte,
    /// Shift JIS double-byte characters
    Kanji,
}

/// Error correction level of a QR symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ECLevel {
    /// Not yet assigned by the encoder
    #[default]
    Undefined,
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

/// Unset sentinel for the numeric symbol fields
const UNSET: i32 = -1;

/// A single QR code symbol under construction
///
/// The encoder fills the fields one at a time in no required order, then
/// assigns the module matrix; `is_valid` reports whether the symbol is
/// complete. Setters perform no validation, so partially configured and
/// out-of-range intermediate states are expected mid-construction.
#[derive(Debug, Clone)]
pub struct QRCode {
    mode: Mode,
    ec_level: ECLevel,
    version: i32,
    matrix_width: i32,
    mask_pattern: i32,
    num_total_bytes: i32,
    num_data_bytes: i32,
    num_ec_bytes: i32,
    num_rs_blocks: i32,
    matrix: Option<ByteMatrix>,
}

impl QRCode {
    /// Create a symbol with every field unset and no matrix
    pub fn new() -> Self {
        Self {
            mode: Mode::Undefined,
            ec_level: ECLevel::Undefined,
            version: UNSET,
            matrix_width: UNSET,
            mask_pattern: UNSET,
            num_total_bytes: UNSET,
            num_data_bytes: UNSET,
            num_ec_bytes: UNSET,
            num_rs_blocks: UNSET,
            matrix: None,
        }
    }

    /// Get the data encoding mode
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Get the error correction level
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Get the version (1-40), or -1 if unset
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Get the matrix width in modules, or -1 if unset
    pub fn matrix_width(&self) -> i32 {
        self.matrix_width
    }

    /// Get the mask pattern (0-7), or -1 if unset
    pub fn mask_pattern(&self) -> i32 {
        self.mask_pattern
    }

    /// Get the total codeword count, or -1 if unset
    pub fn num_total_bytes(&self) -> i32 {
        self.num_total_bytes
    }

    /// Get the data codeword count, or -1 if unset
    pub fn num_data_bytes(&self) -> i32 {
        self.num_data_bytes
    }

    /// Get the error correction codeword count, or -1 if unset
    pub fn num_ec_bytes(&self) -> i32 {
        self.num_ec_bytes
    }

    /// Get the Reed-Solomon block count, or -1 if unset
    pub fn num_rs_blocks(&self) -> i32 {
        self.num_rs_blocks
    }

    /// Get the module matrix, if one has been assigned
    pub fn matrix(&self) -> Option<&ByteMatrix> {
        self.matrix.as_ref()
    }

    /// Get the module value at column `x`, row `y`
    ///
    /// Equivalent to `matrix().get(y, x)` -- note the swapped axis order
    /// relative to [`ByteMatrix::get`], which takes (row, col).
    ///
    /// # Panics
    /// Panics if no matrix has been assigned or (x, y) is out of range.
    pub fn at(&self, x: usize, y: usize) -> u8 {
        let matrix = self.matrix.as_ref().expect("matrix is not set");
        matrix.get(y, x)
    }

    /// Set the data encoding mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Set the error correction level
    pub fn set_ec_level(&mut self, ec_level: ECLevel) {
        self.ec_level = ec_level;
    }

    /// Set the version
    pub fn set_version(&mut self, version: i32) {
        self.version = version;
    }

    /// Set the matrix width in modules
    pub fn set_matrix_width(&mut self, matrix_width: i32) {
        self.matrix_width = matrix_width;
    }

    /// Set the mask pattern
    pub fn set_mask_pattern(&mut self, mask_pattern: i32) {
        self.mask_pattern = mask_pattern;
    }

    /// Set the total codeword count
    pub fn set_num_total_bytes(&mut self, num_total_bytes: i32) {
        self.num_total_bytes = num_total_bytes;
    }

    /// Set the data codeword count
    pub fn set_num_data_bytes(&mut self, num_data_bytes: i32) {
        self.num_data_bytes = num_data_bytes;
    }

    /// Set the error correction codeword count
    pub fn set_num_ec_bytes(&mut self, num_ec_bytes: i32) {
        self.num_ec_bytes = num_ec_bytes;
    }

    /// Set the Reed-Solomon block count
    pub fn set_num_rs_blocks(&mut self, num_rs_blocks: i32) {
        self.num_rs_blocks = num_rs_blocks;
    }

    /// Assign the module matrix, replacing any previous one
    pub fn set_matrix(&mut self, matrix: ByteMatrix) {
        self.matrix = Some(matrix);
    }

    /// Check whether the symbol is structurally complete and in range
    ///
    /// Recomputed on every call; any setter can change the answer. Only the
    /// single-field range checks apply -- in particular the matrix width is
    /// never cross-checked against the version, that relation is the
    /// encoder's responsibility.
    pub fn is_valid(&self) -> bool {
        Self::is_valid_mode(self.mode)
            && Self::is_valid_ec_level(self.ec_level)
            && Self::is_valid_version(self.version)
            && Self::is_valid_matrix_width(self.matrix_width)
            && Self::is_valid_mask_pattern(self.mask_pattern)
            && self.num_total_bytes != UNSET
            && self.num_data_bytes != UNSET
            && self.num_ec_bytes != UNSET
            && self.num_rs_blocks != UNSET
            && self.matrix.is_some()
    }

    /// Check whether a version number is in the standard range 1-40
    pub fn is_valid_version(version: i32) -> bool {
        (1..=40).contains(&version)
    }

    /// Check whether an error correction level is assigned
    pub fn is_valid_ec_level(ec_level: ECLevel) -> bool {
        !matches!(ec_level, ECLevel::Undefined)
    }

    /// Check whether a mode is one the encoder supports
    ///
    /// Kanji is excluded here even though it has a mode indicator in
    /// [`Self::mode_code`]; the reference encoder never produces Kanji
    /// symbols and its tests pin the asymmetry.
    pub fn is_valid_mode(mode: Mode) -> bool {
        matches!(mode, Mode::Numeric | Mode::Alphanumeric | Mode::EightBitByte)
    }

    /// Check whether a matrix width is in the standard range 21-177
    pub fn is_valid_matrix_width(matrix_width: i32) -> bool {
        (21..=177).contains(&matrix_width)
    }

    /// Check whether a mask pattern is in the standard range 0-7
    pub fn is_valid_mask_pattern(mask_pattern: i32) -> bool {
        (0..=7).contains(&mask_pattern)
    }

    /// Get the name of a mode as it appears in the symbol dump
    pub fn mode_to_string(mode: Mode) -> &'static str {
        // The reference dump table has no Kanji entry; it prints as UNKNOWN.
        match mode {
            Mode::Undefined => "UNDEFINED",
            Mode::Numeric => "NUMERIC",
            Mode::Alphanumeric => "ALPHANUMERIC",
            Mode::EightBitByte => "8BIT_BYTE",
            Mode::Kanji => "UNKNOWN",
        }
    }

    /// Get the name of an error correction level as it appears in the dump
    pub fn ec_level_to_string(ec_level: ECLevel) -> &'static str {
        match ec_level {
            ECLevel::Undefined => "UNDEFINED",
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        }
    }

    /// Get the standard 4-bit mode indicator
    pub fn mode_code(mode: Mode) -> Result<u8, EncodeError> {
        match mode {
            Mode::Numeric => Ok(1),
            Mode::Alphanumeric => Ok(2),
            Mode::EightBitByte => Ok(4),
            Mode::Kanji => Ok(8),
            Mode::Undefined => Err(EncodeError::UnencodableMode(mode)),
        }
    }

    /// Get the standard 2-bit error correction level indicator
    pub fn ec_level_code(ec_level: ECLevel) -> Result<u8, EncodeError> {
        // Indicator values are fixed by the standard and not in L..H order.
        match ec_level {
            ECLevel::L => Ok(1),
            ECLevel::M => Ok(0),
            ECLevel::Q => Ok(3),
            ECLevel::H => Ok(2),
            ECLevel::Undefined => Err(EncodeError::UnencodableEcLevel(ec_level)),
        }
    }
}

impl Default for QRCode {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical multi-line dump of the symbol
///
/// The exact layout (field order, camelCase labels, single leading space per
/// line, trailing newline) is relied on by tools for diffing; any
/// reformatting is a breaking change.
impl fmt::Display for QRCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<<")?;
        writeln!(f, " mode: {}", Self::mode_to_string(self.mode))?;
        writeln!(f, " ecLevel: {}", Self::ec_level_to_string(self.ec_level))?;
        writeln!(f, " version: {}", self.version)?;
        writeln!(f, " matrixWidth: {}", self.matrix_width)?;
        writeln!(f, " maskPattern: {}", self.mask_pattern)?;
        writeln!(f, " numTotalBytes: {}", self.num_total_bytes)?;
        writeln!(f, " numDataBytes: {}", self.num_data_bytes)?;
        writeln!(f, " numECBytes: {}", self.num_ec_bytes)?;
        writeln!(f, " numRSBlocks: {}", self.num_rs_blocks)?;
        match &self.matrix {
            None => writeln!(f, " matrix: null")?,
            Some(matrix) => {
                writeln!(f, " matrix:")?;
                for row in 0..matrix.height() {
                    for col in 0..matrix.width() {
                        write!(f, " {}", matrix.get(row, col))?;
                    }
                    writeln!(f)?;
                }
            }
        }
        writeln!(f, ">>")
    }
}
