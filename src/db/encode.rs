use super::{
    field::FieldValue,
    file_header::HEADER_SIZE,
    layout::{FieldKind, FieldSpec, FIELD_COUNT, HEADER_LAYOUT},
    Result,
};
use crate::{ensure, err};
use bytes::{BufMut, Bytes, BytesMut};
use log::debug;

/// Builds a header from one value per field, in layout order.
pub fn encode(values: &[FieldValue]) -> Result<Bytes> {
    ensure!(
        values.len() == FIELD_COUNT,
        "Expected {FIELD_COUNT} field values, got {}",
        values.len()
    );

    let mut buf = BytesMut::with_capacity(HEADER_SIZE);
    for (spec, value) in HEADER_LAYOUT.iter().zip(values) {
        put_field(&mut buf, spec, value)?;
    }

    debug!("Encoded {} header fields", values.len());
    Ok(buf.freeze())
}

fn put_field(buf: &mut BytesMut, spec: &FieldSpec, value: &FieldValue) -> Result<()> {
    let name = spec.name;
    match (spec.kind, value) {
        (FieldKind::FixedString(width), FieldValue::Text(t)) => {
            ensure!(
                t.len() <= width,
                "{name} holds at most {width} bytes, got {}",
                t.len()
            );
            ensure!(!t.contains('\0'), "{name} must not contain NUL");
            buf.put_slice(t.as_bytes());
            buf.put_bytes(0, width - t.len());
        }
        (FieldKind::Uint8, FieldValue::Uint(n)) => {
            let n = u8::try_from(*n).map_err(|_| err!("{name} does not fit in 1 byte: {n}"))?;
            buf.put_u8(n);
        }
        (FieldKind::Uint16, FieldValue::Uint(n)) => {
            let n = u16::try_from(*n).map_err(|_| err!("{name} does not fit in 2 bytes: {n}"))?;
            buf.put_u16(n);
        }
        (FieldKind::Uint32, FieldValue::Uint(n)) => buf.put_u32(*n),
        (FieldKind::RawBytes(width), FieldValue::Bytes(bytes)) => {
            ensure!(
                bytes.len() == width,
                "{name} must be exactly {width} bytes, got {}",
                bytes.len()
            );
            buf.put_slice(bytes);
        }
        (kind, value) => return Err(err!("{name} is {kind:?}, got {value:?}")),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{decode, Error};

    fn sample_values() -> Vec<FieldValue> {
        HEADER_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, spec)| match spec.kind {
                FieldKind::FixedString(_) => FieldValue::Text("SQLite format 3".into()),
                FieldKind::Uint16 => FieldValue::Uint(1),
                FieldKind::RawBytes(width) => FieldValue::Bytes(Bytes::from(vec![0xa5; width])),
                _ => FieldValue::Uint(i as u32 + 1),
            })
            .collect()
    }

    #[test]
    fn it_round_trips_chosen_values() {
        let values = sample_values();
        let buf = encode(&values).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE);
        assert_eq!(decode(&buf).unwrap().values(), values);
    }

    #[test]
    fn it_writes_big_endian_at_layout_offsets() {
        let buf = encode(&sample_values()).unwrap();
        assert_eq!(&buf[..16], b"SQLite format 3\x00");
        assert_eq!(&buf[16..18], &[0x00, 0x01]);
        assert_eq!(buf[18], 3);
        // TextEncoding is the 17th field.
        assert_eq!(&buf[56..60], &[0x00, 0x00, 0x00, 17]);
    }

    #[test]
    fn it_re_encodes_a_decoded_header() {
        let mut header = [0u8; HEADER_SIZE];
        header[..16].copy_from_slice(b"SQLite format 3\x00");
        header[16..18].copy_from_slice(&[0x10, 0x00]);
        header[96..].copy_from_slice(&3_045_001u32.to_be_bytes());

        let values = decode(&header).unwrap().values();
        assert_eq!(&encode(&values).unwrap()[..], &header[..]);
    }

    #[test]
    fn it_rejects_mismatched_values() {
        assert!(matches!(encode(&[]), Err(Error::Other(_))));

        let mut values = sample_values();
        values[1] = FieldValue::Uint(70000);
        assert!(encode(&values).is_err());

        let mut values = sample_values();
        values[2] = FieldValue::Text("1".into());
        assert!(encode(&values).is_err());

        let mut values = sample_values();
        values[0] = FieldValue::Text("x".repeat(17));
        assert!(encode(&values).is_err());

        let mut values = sample_values();
        values[19] = FieldValue::Bytes(Bytes::from_static(b"short"));
        assert!(encode(&values).is_err());
    }
}
