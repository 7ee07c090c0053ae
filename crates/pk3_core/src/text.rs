use std::fmt;

use crate::error::{CodecError, CodecErrorCode};

/// Terminates (and pads) every in-game string.
pub const TERMINATOR: u8 = 0xFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Western,
    Japanese,
}

impl Charset {
    pub fn table(&self) -> &'static [char; 256] {
        match self {
            Self::Western => &WESTERN,
            Self::Japanese => &JAPANESE,
        }
    }

    pub fn decode_byte(&self, b: u8) -> char {
        self.table()[b as usize]
    }

    /// First code point in the table that renders as `c`.
    pub fn encode_char(&self, c: char) -> Option<u8> {
        self.table()
            .iter()
            .take(TERMINATOR as usize)
            .position(|&t| t == c)
            .map(|i| i as u8)
    }
}

/// Decode until the first terminator or the end of `bytes`.
pub fn decode(bytes: &[u8], charset: Charset) -> String {
    bytes
        .iter()
        .take_while(|&&b| b != TERMINATOR)
        .map(|&b| charset.decode_byte(b))
        .collect()
}

/// Encode `text` into exactly `len` bytes, terminator-padded.
pub fn encode(text: &str, len: usize, charset: Charset) -> Result<Vec<u8>, CodecError> {
    let count = text.chars().count();
    if count > len {
        return Err(CodecError::new(
            CodecErrorCode::InvalidInput,
            format!("text {text:?} is {count} characters, field holds {len}"),
        ));
    }

    let mut out = vec![TERMINATOR; len];
    for (slot, c) in out.iter_mut().zip(text.chars()) {
        *slot = charset.encode_char(c).ok_or_else(|| {
            CodecError::new(
                CodecErrorCode::InvalidInput,
                format!("character {c:?} has no {charset:?} encoding"),
            )
        })?;
    }
    Ok(out)
}

/// Fixed-width in-game text field. Keeps the raw bytes so that padding and
/// glitched characters survive a decode/encode cycle unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameText<const N: usize> {
    raw: [u8; N],
}

impl<const N: usize> Default for GameText<N> {
    fn default() -> Self {
        Self { raw: [0u8; N] }
    }
}

impl<const N: usize> GameText<N> {
    pub const LEN: usize = N;

    pub fn from_raw(raw: [u8; N]) -> Self {
        Self { raw }
    }

    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        let raw: [u8; N] = bytes.get(..N)?.try_into().ok()?;
        Some(Self { raw })
    }

    pub fn encode(text: &str, charset: Charset) -> Result<Self, CodecError> {
        let bytes = encode(text, N, charset)?;
        let mut raw = [TERMINATOR; N];
        raw.copy_from_slice(&bytes);
        Ok(Self { raw })
    }

    pub fn raw(&self) -> &[u8; N] {
        &self.raw
    }

    /// All-zero fields (empty slots) decode to an empty string rather than spaces.
    pub fn is_zeroed(&self) -> bool {
        self.raw.iter().all(|&b| b == 0)
    }

    pub fn decode(&self, charset: Charset) -> String {
        if self.is_zeroed() {
            return String::new();
        }
        decode(&self.raw, charset)
    }

    pub fn display(&self, charset: Charset) -> TextDisplay<'_, N> {
        TextDisplay {
            text: self,
            charset,
        }
    }
}

pub struct TextDisplay<'a, const N: usize> {
    text: &'a GameText<N>,
    charset: Charset,
}

impl<const N: usize> fmt::Display for TextDisplay<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text.decode(self.charset).trim_end())
    }
}

const WESTERN: [char; 256] = [
    ' ', 'À', 'Á', 'Â', 'Ç', 'È', 'É', 'Ê', 'Ë', 'Ì', ' ', 'Î', 'Ï', 'Ò', 'Ó', 'Ô',
    'Œ', 'Ù', 'Ú', 'Û', 'Ñ', 'ß', 'à', 'á', ' ', 'ç', 'è', 'é', 'ê', 'ë', 'ì', 'í',
    'î', 'ï', 'ò', 'ó', 'ô', 'œ', 'ù', 'ú', 'û', 'ñ', 'º', 'ª', ' ', '&', '+', ' ',
    ' ', ' ', ' ', ' ', 'ˡ', '=', ';', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ',
    ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ',
    '▯', '¿', '¡', ' ', ' ', ' ', ' ', ' ', ' ', ' ', 'Í', '%', '(', ')', ' ', ' ',
    ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', 'â', ' ', ' ', ' ', ' ', ' ', ' ', 'í',
    ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', '⬆', '⬇', '⬅', '⮕', '*', '*', '*',
    '*', '*', '*', '*', 'ᵉ', '<', '>', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ',
    ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ',
    ' ', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '!', '?', '.', '-', '・',
    '…', '“', '”', '‘', '’', '♂', '♀', '$', ',', '×', '/', 'A', 'B', 'C', 'D', 'E',
    'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k',
    'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '▶',
    ':', 'Ä', 'Ö', 'Ü', 'ä', 'ö', 'ü', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ', ' ',
];

const JAPANESE: [char; 256] = [
    '　', 'あ', 'い', 'う', 'え', 'お', 'か', 'き', 'く', 'け', 'こ', 'さ', 'し', 'す', 'せ', 'そ',
    'た', 'ち', 'つ', 'て', 'と', 'な', 'に', 'ぬ', 'ね', 'の', 'は', 'ひ', 'ふ', 'へ', 'ほ', 'ま',
    'み', 'む', 'め', 'も', 'や', 'ゆ', 'よ', 'ら', 'り', 'る', 'れ', 'ろ', 'わ', 'を', 'ん', 'ぁ',
    'ぃ', 'ぅ', 'ぇ', 'ぉ', 'ゃ', 'ゅ', 'ょ', 'が', 'ぎ', 'ぐ', 'げ', 'ご', 'ざ', 'じ', 'ず', 'ぜ',
    'ぞ', 'だ', 'ぢ', 'づ', 'で', 'ど', 'ば', 'び', 'ぶ', 'べ', 'ぼ', 'ぱ', 'ぴ', 'ぷ', 'ぺ', 'ぽ',
    'っ', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ',
    'タ', 'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ',
    'ミ', 'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ヲ', 'ン', 'ァ',
    'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ガ', 'ギ', 'グ', 'ゲ', 'ゴ', 'ザ', 'ジ', 'ズ', 'ゼ',
    'ゾ', 'ダ', 'ヂ', 'ヅ', 'デ', 'ド', 'バ', 'ビ', 'ブ', 'ベ', 'ボ', 'パ', 'ピ', 'プ', 'ペ', 'ポ',
    'ッ', '０', '１', '２', '３', '４', '５', '６', '７', '８', '９', '！', '？', '。', '－', '・',
    '‥', '『', '』', '「', '」', '♂', '♀', '＄', '．', '×', '／', 'Ａ', 'Ｂ', 'Ｃ', 'Ｄ', 'Ｅ',
    'Ｆ', 'Ｇ', 'Ｈ', 'Ｉ', 'Ｊ', 'Ｋ', 'Ｌ', 'Ｍ', 'Ｎ', 'Ｏ', 'Ｐ', 'Ｑ', 'Ｒ', 'Ｓ', 'Ｔ', 'Ｕ',
    'Ｖ', 'Ｗ', 'Ｘ', 'Ｙ', 'Ｚ', 'ａ', 'ｂ', 'ｃ', 'ｄ', 'ｅ', 'ｆ', 'ｇ', 'ｈ', 'ｉ', 'ｊ', 'ｋ',
    'ｌ', 'ｍ', 'ｎ', 'ｏ', 'ｐ', 'ｑ', 'ｒ', 'ｓ', 'ｔ', 'ｕ', 'ｖ', 'ｗ', 'ｘ', 'ｙ', 'ｚ', '▶',
    '：', 'Ä', 'Ö', 'Ü', 'ä', 'ö', 'ü', '⬆', '⬇', '⬅', ' ', ' ', ' ', ' ', ' ', ' ',
];
