//! SMBIOS identity generation
//!
//! Produces the serial, board serial, and system UUID a user pastes into
//! `PlatformInfo.Generic` in place of the GENERATE_ME placeholders. Serials
//! use the Apple-style alphabet with I and O excluded; the board serial
//! extends the system serial by five characters.

use rand::Rng;
use serde::Serialize;

/// Characters valid in generated serials (no I, no O)
pub const SERIAL_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ0123456789";

/// System serial length
pub const SERIAL_LEN: usize = 12;

/// Extra characters the board serial appends to the system serial
pub const BOARD_SERIAL_EXTRA: usize = 5;

/// A complete generated platform identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmbiosIdentity {
    /// SMBIOS product name the identity is for (e.g. "iMac20,1")
    pub model: String,
    /// 12-character system serial
    pub serial: String,
    /// 17-character board serial (MLB), serial plus five characters
    pub board_serial: String,
    /// Random UUIDv4-format system UUID, uppercase
    pub uuid: String,
}

fn random_serial<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| SERIAL_ALPHABET[rng.gen_range(0..SERIAL_ALPHABET.len())] as char)
        .collect()
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    // RFC 4122 version 4, variant 1
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
    format!(
        "{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        bytes[6], bytes[7],
        bytes[8], bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

/// Generate a fresh identity for an SMBIOS model
pub fn generate_identity<R: Rng + ?Sized>(model: &str, rng: &mut R) -> SmbiosIdentity {
    let serial = random_serial(rng, SERIAL_LEN);
    let board_serial = format!("{}{}", serial, random_serial(rng, BOARD_SERIAL_EXTRA));
    SmbiosIdentity {
        model: model.to_string(),
        serial,
        board_serial,
        uuid: random_uuid(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_serial_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        let id = generate_identity("iMac20,1", &mut rng);
        assert_eq!(id.serial.len(), 12);
        assert_eq!(id.board_serial.len(), 17);
        assert!(id.board_serial.starts_with(&id.serial));
        assert!(id
            .serial
            .bytes()
            .all(|b| SERIAL_ALPHABET.contains(&b)));
        // I and O never appear
        assert!(!id.board_serial.contains('I'));
        assert!(!id.board_serial.contains('O'));
    }

    #[test]
    fn test_uuid_format() {
        let mut rng = StdRng::seed_from_u64(2);
        let id = generate_identity("MacPro7,1", &mut rng);
        let groups: Vec<&str> = id.uuid.split('-').collect();
        assert_eq!(groups.len(), 5);
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12]
        );
        // version nibble is 4, variant nibble is 8..B
        assert!(groups[2].starts_with('4'));
        assert!(matches!(
            groups[3].chars().next(),
            Some('8') | Some('9') | Some('A') | Some('B')
        ));
    }

    #[test]
    fn test_seeded_identity_is_deterministic() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        assert_eq!(
            generate_identity("iMac20,1", &mut a),
            generate_identity("iMac20,1", &mut b)
        );
    }
}
