mod common;

use pk3_core::creature::crypto::{self, PERMUTATIONS};
use pk3_core::creature::substructure::Condition;
use pk3_core::creature::{BOX_RECORD_SIZE, PARTY_RECORD_SIZE, PartyStats, RecordFlags};
use pk3_core::{CodecErrorCode, CreatureRecord, Encryption, RecordLayout};

use common::sample_record;

fn stored_checksum(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0x1C], bytes[0x1D]])
}

#[test]
fn plaintext_party_record_round_trips_every_field() {
    let record = sample_record();
    let bytes = record.encode(RecordLayout::Party, Encryption::Plaintext);
    assert_eq!(bytes.len(), PARTY_RECORD_SIZE);

    let decoded =
        CreatureRecord::decode(&bytes, RecordLayout::Party, Encryption::Plaintext).expect("decode");
    let expected = CreatureRecord {
        checksum: stored_checksum(&bytes),
        ..record
    };
    assert_eq!(decoded, expected);
    assert_eq!(decoded.encode(RecordLayout::Party, Encryption::Plaintext), bytes);
}

#[test]
fn encrypted_party_record_round_trips_every_field() {
    let record = sample_record();
    let bytes = record.encode(RecordLayout::Party, Encryption::Encrypted);

    let decoded =
        CreatureRecord::decode(&bytes, RecordLayout::Party, Encryption::Encrypted).expect("decode");
    assert_eq!(decoded.growth, record.growth);
    assert_eq!(decoded.attacks, record.attacks);
    assert_eq!(decoded.condition, record.condition);
    assert_eq!(decoded.misc, record.misc);
    assert_eq!(decoded.party, record.party);
    assert_eq!(decoded.nickname_string(), "SPARKY");
    assert_eq!(decoded.trainer_name_string(), "ASH");
}

/// Boxed, encrypted record with PID % 24 == 1: growth, attacks, misc, condition.
/// Key 0x95511558; nickname SPARKY, trainer ASH, English.
#[rustfmt::skip]
const KNOWN_BOXED: [u8; BOX_RECORD_SIZE] = [
    0x79, 0x56, 0x34, 0x12, 0x21, 0x43, 0x65, 0x87, 0xCD, 0xCA, 0xBB, 0xCC, 0xC5, 0xD3, 0xFF, 0xFF,
    0xFF, 0xFF, 0x02, 0x02, 0xBB, 0xCD, 0xC2, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x7E, 0x8D, 0x00, 0x00,
    0x41, 0x15, 0x51, 0x95, 0x10, 0xFD, 0x50, 0x95, 0x58, 0x53, 0x51, 0x95, 0x0C, 0x15, 0x51, 0x95,
    0x58, 0x15, 0x51, 0x95, 0x46, 0x15, 0x51, 0x95, 0x58, 0x05, 0xD4, 0xB4, 0x87, 0x62, 0xEF, 0xA0,
    0x58, 0x15, 0x51, 0x95, 0x58, 0x15, 0x51, 0x95, 0x58, 0x15, 0x51, 0x95, 0x58, 0x15, 0x51, 0x95,
];

#[test]
fn known_encrypted_boxed_record_decodes_and_re_encodes_exactly() {
    let record = CreatureRecord::decode(&KNOWN_BOXED, RecordLayout::Boxed, Encryption::Encrypted)
        .expect("decode");

    assert_eq!(record.pid, 0x1234_5679);
    assert_eq!(record.otid, 0x8765_4321);
    assert_eq!(record.encryption_key(), 0x9551_1558);
    assert_eq!(record.order_index(), 1);
    assert_eq!(record.order_name(), "GAME");
    assert_eq!(record.nickname_string(), "SPARKY");
    assert_eq!(record.trainer_name_string(), "ASH");

    assert_eq!(record.growth.species, 25);
    assert_eq!(record.growth.experience, 125_000);
    assert_eq!(record.growth.friendship, 70);
    assert_eq!(record.attacks.moves, [84, 0, 0, 0]);
    assert_eq!(record.attacks.pp, [30, 0, 0, 0]);
    let ivs = record.misc.genes.ivs;
    assert_eq!(
        [ivs.hp, ivs.attack, ivs.defense, ivs.speed, ivs.sp_attack, ivs.sp_defense],
        [31, 30, 29, 28, 27, 26]
    );
    assert_eq!(record.misc.met_location, 0x10);
    assert_eq!(record.misc.origin.met_level, 5);
    assert_eq!(record.misc.origin.met_game, 3);
    assert_eq!(record.misc.origin.ball, 4);
    assert_eq!(record.condition, Condition::default());

    // Stored sum covers the ciphertext; the plaintext sum differs.
    assert_eq!(record.checksum, 0x8D7E);
    assert_eq!(record.plaintext_checksum(), 0x0DF6);

    assert_eq!(
        record.encode(RecordLayout::Boxed, Encryption::Encrypted),
        KNOWN_BOXED.to_vec()
    );
}

#[test]
fn plaintext_layout_keeps_canonical_substructure_order() {
    let record = sample_record();
    let bytes = record.encode(RecordLayout::Party, Encryption::Plaintext);

    assert_eq!(&bytes[0x00..0x04], &record.pid.to_le_bytes());
    assert_eq!(&bytes[0x04..0x08], &record.otid.to_le_bytes());
    // Growth first: species 25, held item 13.
    assert_eq!(&bytes[0x20..0x24], &[25, 0, 13, 0]);
    // Attacks second: first move 84.
    assert_eq!(&bytes[0x2C..0x2E], &[84, 0]);
    // Party block.
    assert_eq!(bytes[0x54], 50);
    assert_eq!(&bytes[0x56..0x58], &100u16.to_le_bytes());
    assert_eq!(&bytes[0x58..0x5A], &120u16.to_le_bytes());
}

#[test]
fn encrypted_layout_places_each_kind_at_its_permuted_slot() {
    let record = sample_record();
    assert_eq!(record.order_index(), 18);
    assert_eq!(record.order_name(), "MGAE");

    let plain = record.encode(RecordLayout::Boxed, Encryption::Plaintext);
    let cipher = record.encode(RecordLayout::Boxed, Encryption::Encrypted);
    let key = record.encryption_key();

    for (slot, &kind) in PERMUTATIONS[18].iter().enumerate() {
        let mut block = [0u8; 12];
        block.copy_from_slice(&cipher[0x20 + slot * 12..0x20 + (slot + 1) * 12]);
        let decrypted = crypto::xor_block(&block, key);
        assert_eq!(&decrypted[..], &plain[0x20 + kind * 12..0x20 + (kind + 1) * 12]);
    }
}

#[test]
fn checksum_is_summed_over_the_written_region() {
    let record = sample_record();
    for encryption in [Encryption::Plaintext, Encryption::Encrypted] {
        let bytes = record.encode(RecordLayout::Party, encryption);
        assert_eq!(stored_checksum(&bytes), crypto::checksum(&bytes[0x20..0x50]));
    }

    let plain = record.encode(RecordLayout::Party, Encryption::Plaintext);
    assert_eq!(stored_checksum(&plain), record.plaintext_checksum());
}

#[test]
fn re_encoding_an_unmodified_record_keeps_its_checksum() {
    for encryption in [Encryption::Plaintext, Encryption::Encrypted] {
        let bytes = sample_record().encode(RecordLayout::Boxed, encryption);
        let decoded =
            CreatureRecord::decode(&bytes, RecordLayout::Boxed, encryption).expect("decode");
        let again = decoded.encode(RecordLayout::Boxed, encryption);
        assert_eq!(stored_checksum(&again), decoded.checksum);
        assert_eq!(again, bytes);
    }
}

#[test]
fn boxed_layout_omits_party_block() {
    let bytes = sample_record().encode(RecordLayout::Boxed, Encryption::Encrypted);
    assert_eq!(bytes.len(), BOX_RECORD_SIZE);

    let decoded =
        CreatureRecord::decode(&bytes, RecordLayout::Boxed, Encryption::Encrypted).expect("decode");
    assert_eq!(decoded.party, PartyStats::default());
}

#[test]
fn short_input_is_malformed_and_decode_or_blank_gives_blank() {
    let bytes = sample_record().encode(RecordLayout::Party, Encryption::Plaintext);

    let err = CreatureRecord::decode(&bytes[..0x50], RecordLayout::Party, Encryption::Plaintext)
        .expect_err("party layout needs 0x64 bytes");
    assert_eq!(err.code, CodecErrorCode::MalformedRecord);

    let blank =
        CreatureRecord::decode_or_blank(&bytes[..0x20], RecordLayout::Boxed, Encryption::Encrypted);
    assert!(blank.is_blank());
}

#[test]
fn zeroed_slot_decodes_to_blank_record() {
    let zeros = [0u8; BOX_RECORD_SIZE];
    let record =
        CreatureRecord::decode(&zeros, RecordLayout::Boxed, Encryption::Encrypted).expect("decode");
    assert!(record.is_blank());
    assert_eq!(record, CreatureRecord::default());
    assert_eq!(record.nickname_string(), "");
}

#[test]
fn any_populated_field_makes_record_non_blank() {
    assert!(!sample_record().is_blank());

    let mut record = CreatureRecord::default();
    record.misc.ribbons.unused = 1;
    assert!(!record.is_blank());

    let mut record = CreatureRecord::default();
    record.party.mail_id = 1;
    assert!(!record.is_blank());
}

#[test]
fn glitched_indices_survive_round_trip() {
    let mut record = sample_record();
    record.growth.species = 0xFFFF;
    record.attacks.moves = [0xFFFF, 999, 0, 1];
    record.growth.held_item = 0xBEEF;
    let bytes = record.encode(RecordLayout::Boxed, Encryption::Encrypted);
    let decoded =
        CreatureRecord::decode(&bytes, RecordLayout::Boxed, Encryption::Encrypted).expect("decode");
    assert_eq!(decoded.growth.species, 0xFFFF);
    assert_eq!(decoded.attacks.moves, [0xFFFF, 999, 0, 1]);
    assert_eq!(decoded.growth.held_item, 0xBEEF);
}

#[test]
fn encryption_guess_uses_pid_otid_equality() {
    assert_eq!(Encryption::guess(5, 5), Encryption::Plaintext);
    assert_eq!(Encryption::guess(5, 6), Encryption::Encrypted);
}

#[test]
fn mail_encode_overwrites_identity_after_encrypting() {
    let mut record = sample_record();
    record.otid = record.pid;
    assert!(record.is_decrypted());
    assert_eq!(record.encryption_key(), 0);

    let mailed = record.encode_with_mail(0xAAAA_BBBB, 0x1234_0000).expect("mail encode");
    let plain = record.encode(RecordLayout::Party, Encryption::Encrypted);

    assert_eq!(&mailed[0x0..0x4], &0xAAAA_BBBBu32.to_le_bytes());
    assert_eq!(&mailed[0x4..0x8], &0x1234_0000u32.to_le_bytes());
    // Substructures stay ordered and keyed under the previous identity.
    assert_eq!(&mailed[0x08..], &plain[0x08..]);
}

#[test]
fn mail_encode_rejects_encrypted_identity() {
    let err = sample_record()
        .encode_with_mail(1, 2)
        .expect_err("pid != otid must be rejected");
    assert_eq!(err.code, CodecErrorCode::InvalidInput);
}

#[test]
fn identity_accessors() {
    let record = sample_record();
    assert_eq!(record.trainer_id(), 0xDEF0);
    assert_eq!(record.secret_id(), 0x9ABC);
    assert_eq!(record.nature_index(), 3);
    assert!(!record.is_shiny());
    assert_eq!(
        record.record_flags(),
        RecordFlags {
            has_species: true,
            ..RecordFlags::default()
        }
    );

    let shiny = CreatureRecord {
        pid: 0x1111_555E,
        ..record
    };
    assert!(shiny.is_shiny());
}

#[test]
fn pp_bonuses_split_into_two_bit_fields() {
    let mut record = sample_record();
    assert_eq!(record.growth.pp_bonus(0), 0);
    assert_eq!(record.growth.pp_bonus(1), 1);
    assert_eq!(record.growth.pp_bonus(2), 2);
    assert_eq!(record.growth.pp_bonus(3), 3);

    record.growth.set_pp_bonus(0, 3);
    assert_eq!(record.growth.pp_bonuses, 0b11_10_01_11);
}

#[test]
fn nickname_edits_use_record_charset() {
    let mut record = sample_record();
    record.set_nickname("Pika").expect("western name");
    assert_eq!(record.nickname_string(), "Pika");
    assert_eq!(record.nickname.raw()[4], 0xFF);

    record.language = 1;
    assert!(record.set_nickname("Pika").is_err());
    record.set_nickname("ピカ").expect("japanese name");
    assert_eq!(record.nickname_string(), "ピカ");
}
