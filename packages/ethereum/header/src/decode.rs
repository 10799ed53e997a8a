//! This module provides [`DecodedHeader`], a single-pass reader for the fields the RANDAO
//! verifier needs out of canonical header bytes.

use alloy_primitives::B256;
use alloy_rlp::{Decodable, Header};
use randao_accessor_utils::ensure;

use crate::error::HeaderDecodeError;

/// Number of fields of a pre-London header
pub const BASE_FIELD_COUNT: usize = 15;

const NUMBER_INDEX: usize = 8;
const MIX_HASH_INDEX: usize = 13;

/// The fields read back out of an encoded header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedHeader {
    /// Block number
    pub number: u64,
    /// Mix hash (the RANDAO value after the merge)
    pub mix_hash: B256,
    /// Number of fields in the header list
    pub field_count: usize,
}

impl DecodedHeader {
    /// Decodes `number` and `mixHash` from an RLP encoded header.
    ///
    /// The whole list is walked: every field must be a byte string and nothing may follow the
    /// list.
    ///
    /// # Errors
    /// Returns an error if the bytes are not a well formed header list of at least
    /// [`BASE_FIELD_COUNT`] fields, if the number is not a canonical `u64`, or if the mix hash
    /// is not 32 bytes.
    pub fn decode(mut buf: &[u8]) -> Result<Self, HeaderDecodeError> {
        let header = Header::decode(&mut buf)?;
        ensure!(header.list, HeaderDecodeError::NotAList);
        ensure!(
            buf.len() >= header.payload_length,
            HeaderDecodeError::Rlp(alloy_rlp::Error::InputTooShort)
        );

        let (mut payload, trailing) = buf.split_at(header.payload_length);
        ensure!(
            trailing.is_empty(),
            HeaderDecodeError::TrailingBytes(trailing.len())
        );

        let mut number = None;
        let mut mix_hash = None;
        let mut field_count = 0;
        while !payload.is_empty() {
            match field_count {
                NUMBER_INDEX => number = Some(u64::decode(&mut payload)?),
                MIX_HASH_INDEX => mix_hash = Some(B256::decode(&mut payload)?),
                index => skip_string(&mut payload, index)?,
            }
            field_count += 1;
        }

        match (number, mix_hash) {
            (Some(number), Some(mix_hash)) if field_count >= BASE_FIELD_COUNT => Ok(Self {
                number,
                mix_hash,
                field_count,
            }),
            _ => Err(HeaderDecodeError::TooFewFields {
                expected: BASE_FIELD_COUNT,
                found: field_count,
            }),
        }
    }
}

fn skip_string(payload: &mut &[u8], index: usize) -> Result<(), HeaderDecodeError> {
    let item = Header::decode(payload)?;
    ensure!(!item.list, HeaderDecodeError::NestedList { index });
    ensure!(
        payload.len() >= item.payload_length,
        HeaderDecodeError::Rlp(alloy_rlp::Error::InputTooShort)
    );
    *payload = &payload[item.payload_length..];
    Ok(())
}

#[cfg(test)]
mod test {
    use alloy_primitives::{b256, Bytes, B256};
    use alloy_rlp::Encodable;
    use randao_test_utils::fixtures;
    use rstest::rstest;

    use super::{DecodedHeader, BASE_FIELD_COUNT};
    use crate::{error::HeaderDecodeError, raw::RawHeaderFields};

    fn encode_list(items: &[Bytes]) -> Vec<u8> {
        let mut out = Vec::new();
        alloy_rlp::encode_list::<_, Bytes>(items, &mut out);
        out
    }

    #[rstest]
    #[case::genesis("mainnet_genesis", 0, B256::ZERO, 15)]
    #[case::london(
        "london_block",
        14_935_764,
        b256!("9797b2d7ee33313590bc1e650f2b857c8c3037a19fbb00caafb147be222b1862"),
        16
    )]
    #[case::shanghai(
        "shanghai_block",
        17_699_001,
        b256!("4b74b0dda3c17c0dfc46d8d31cd11cd44af24c0fc46209e37729c3f7733d23bd"),
        17
    )]
    #[case::cancun(
        "cancun_block",
        19_531_250,
        b256!("3d8feaf3bc404b4042b2238e1474334c0bff4bcbe0207681d01100ab5ad8b603"),
        20
    )]
    fn test_decode_fixture(
        #[case] fixture: &str,
        #[case] number: u64,
        #[case] mix_hash: B256,
        #[case] field_count: usize,
    ) {
        let raw: RawHeaderFields = fixtures::load(fixture);
        let decoded = raw.canonicalize().unwrap().decode().unwrap();

        assert_eq!(
            decoded,
            DecodedHeader {
                number,
                mix_hash,
                field_count,
            }
        );
    }

    #[test]
    fn test_decode_single_byte_number() {
        let mut items = vec![Bytes::new(); BASE_FIELD_COUNT];
        items[8] = Bytes::from_static(&[0x7f]);
        items[13] = Bytes::from_static(&[0xab; 32]);

        let decoded = DecodedHeader::decode(&encode_list(&items)).unwrap();
        assert_eq!(decoded.number, 0x7f);
        assert_eq!(decoded.mix_hash, B256::repeat_byte(0xab));
    }

    #[test]
    fn test_rejects_string() {
        let mut out = Vec::new();
        Bytes::from_static(&[0x01; 40]).encode(&mut out);

        assert_eq!(
            DecodedHeader::decode(&out),
            Err(HeaderDecodeError::NotAList)
        );
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let raw: RawHeaderFields = fixtures::load("shanghai_block");
        let mut bytes = raw.canonicalize().unwrap().into_bytes().to_vec();
        bytes.extend_from_slice(&[0x80, 0x80]);

        assert_eq!(
            DecodedHeader::decode(&bytes),
            Err(HeaderDecodeError::TrailingBytes(2))
        );
    }

    #[test]
    fn test_rejects_truncated() {
        let raw: RawHeaderFields = fixtures::load("shanghai_block");
        let bytes = raw.canonicalize().unwrap().into_bytes();

        assert_eq!(
            DecodedHeader::decode(&bytes[..bytes.len() - 1]),
            Err(HeaderDecodeError::Rlp(alloy_rlp::Error::InputTooShort))
        );
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(
            DecodedHeader::decode(&[]),
            Err(HeaderDecodeError::Rlp(alloy_rlp::Error::InputTooShort))
        );
    }

    #[test]
    fn test_rejects_too_few_fields() {
        let mut items = vec![Bytes::new(); BASE_FIELD_COUNT - 1];
        items[13] = Bytes::from_static(&[0xab; 32]);

        assert_eq!(
            DecodedHeader::decode(&encode_list(&items)),
            Err(HeaderDecodeError::TooFewFields {
                expected: BASE_FIELD_COUNT,
                found: BASE_FIELD_COUNT - 1,
            })
        );
    }

    #[test]
    fn test_rejects_short_mix_hash() {
        let mut items = vec![Bytes::new(); BASE_FIELD_COUNT];
        items[13] = Bytes::from_static(&[0xab; 31]);

        assert!(matches!(
            DecodedHeader::decode(&encode_list(&items)),
            Err(HeaderDecodeError::Rlp(_))
        ));
    }

    #[test]
    fn test_rejects_nested_list() {
        let mut payload = Vec::new();
        for index in 0..BASE_FIELD_COUNT {
            if index == 2 {
                alloy_rlp::encode_list::<_, Bytes>(&[Bytes::new()], &mut payload);
            } else if index == 13 {
                Bytes::from_static(&[0xab; 32]).encode(&mut payload);
            } else {
                Bytes::new().encode(&mut payload);
            }
        }
        let mut out = Vec::new();
        alloy_rlp::Header {
            list: true,
            payload_length: payload.len(),
        }
        .encode(&mut out);
        out.extend_from_slice(&payload);

        assert_eq!(
            DecodedHeader::decode(&out),
            Err(HeaderDecodeError::NestedList { index: 2 })
        );
    }
}
