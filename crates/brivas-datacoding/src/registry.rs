//! Lookup of codec singletons by `data_coding` value

use crate::charmap::{ASCII, CYRILLIC, HEBREW, LATIN1};
use crate::coding::{DataCoding, EncDec};
use crate::errors::Result;
use crate::gsm7::GSM7BIT;
use crate::ucs2::UCS2;

/// Codec registered for an SMPP `data_coding` value.
///
/// GSM 7-bit resolves to the unpacked form; callers that need the packed
/// form hold `GSM7BITPACKED` directly.
pub fn from_data_coding(coding: impl Into<DataCoding>) -> Option<&'static dyn EncDec> {
    match coding.into() {
        DataCoding::GSM7BIT => Some(&GSM7BIT),
        DataCoding::ASCII => Some(&ASCII),
        DataCoding::LATIN1 => Some(&LATIN1),
        DataCoding::CYRILLIC => Some(&CYRILLIC),
        DataCoding::HEBREW => Some(&HEBREW),
        DataCoding::UCS2 => Some(&UCS2),
        _ => None,
    }
}

/// Caller-supplied codec tagged with a caller-chosen `data_coding`
pub struct CustomEncoding<E> {
    coding: DataCoding,
    inner: E,
}

impl<E: EncDec> CustomEncoding<E> {
    pub fn new(coding: impl Into<DataCoding>, inner: E) -> Self {
        Self {
            coding: coding.into(),
            inner,
        }
    }

    pub fn into_inner(self) -> E {
        self.inner
    }
}

impl<E: EncDec> EncDec for CustomEncoding<E> {
    fn encode(&self, text: &str) -> Result<Vec<u8>> {
        self.inner.encode(text)
    }

    fn decode(&self, data: &[u8]) -> Result<String> {
        self.inner.decode(data)
    }

    fn data_coding(&self) -> DataCoding {
        self.coding
    }
}
