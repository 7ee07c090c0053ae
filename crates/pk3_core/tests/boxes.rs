mod common;

use pk3_core::boxes::{BOX_COUNT, BOX_SIZE, SLOTS_PER_BOX};
use pk3_core::save::box_region::{BOX_NAME_LEN, BoxRegion, contributed_range};
use pk3_core::text::{Charset, encode};
use pk3_core::{BoxExtractor, DataTables, SaveContainer};

use common::{GenerationBuilder, build_image, put_u32, sample_boxed_bytes, sample_record};

fn generation_with_boxes() -> GenerationBuilder {
    let mut generation = GenerationBuilder::new(2);
    put_u32(generation.payload_mut(5), 0x0, 4);

    let record = sample_boxed_bytes();
    generation.put_boxed_record(0, 0, &record);
    generation.put_boxed_record(1, 19, &record);
    generation.put_boxed_record(8, 29, &record);

    let s13 = generation.payload_mut(13);
    for (i, name) in ["MAIN", "SPARE"].iter().enumerate() {
        let bytes = encode(name, BOX_NAME_LEN, Charset::Western).expect("box name");
        let start = 0x744 + i * BOX_NAME_LEN;
        s13[start..start + BOX_NAME_LEN].copy_from_slice(&bytes);
    }
    s13[0x7C2] = 3;
    s13[0x7C2 + 8] = 11;
    generation
}

fn parse() -> SaveContainer {
    let image = build_image(&GenerationBuilder::new(1), &generation_with_boxes());
    SaveContainer::parse(&image).expect("parse")
}

#[test]
fn region_concatenates_trimmed_section_spans() {
    let region = parse().box_region().expect("box region");
    let expected: usize = (5..=13)
        .map(|id| contributed_range(id).expect("box section").len())
        .sum();
    assert_eq!(region.data.len(), expected);
    assert_eq!(expected, 0xF7C + 7 * 0xF80 + 0x7D0);
    assert!(region.data.len() >= BOX_COUNT * BOX_SIZE);
    assert_eq!(region.current_box, 4);
    assert_eq!(region.names.len(), 14);
    assert_eq!(region.wallpapers.len(), 14);
}

#[test]
fn stream_offsets_map_to_fixed_section_positions() {
    let mut payloads = vec![vec![0u8; 0xF80]; 9];
    put_u32(&mut payloads[0], 0x0, 7);
    payloads[0][0x4] = 0xA1;
    payloads[1][0x0] = 0xB2;
    payloads[8][0x0] = 0xC3;
    payloads[8][0x7CF] = 0xD4;
    // Bytes past the contributed span of section 13 stay out of the stream.
    payloads[8][0x7D0] = 0xEE;
    let slices: Vec<&[u8]> = payloads.iter().map(Vec::as_slice).collect();

    let region = BoxRegion::assemble(&slices).expect("nine box sections");
    assert_eq!(region.current_box, 7);
    assert_eq!(region.data.len(), 0xF7C + 7 * 0xF80 + 0x7D0);
    assert_eq!(region.data[0], 0xA1);
    assert_eq!(region.data[0xF7C], 0xB2);
    assert_eq!(region.data[0xF7C + 7 * 0xF80], 0xC3);
    assert_eq!(region.data.last(), Some(&0xD4));
    assert!(!region.data.contains(&7));
    assert!(!region.data.contains(&0xEE));
}

#[test]
fn assemble_rejects_wrong_section_count() {
    let payloads = vec![vec![0u8; 0xF80]; 8];
    let slices: Vec<&[u8]> = payloads.iter().map(Vec::as_slice).collect();
    assert!(BoxRegion::assemble(&slices).is_err());
}

#[test]
fn last_valid_box_and_slot_decode() {
    let region = parse().box_region().expect("box region");
    let extractor = BoxExtractor::new(&region);
    let tables = DataTables::builtin();

    let record = extractor
        .extract_slot(8, 29, &tables)
        .expect("box 8 slot 29 is in range");
    let expected = sample_record();
    assert_eq!(record.growth, expected.growth);
    assert_eq!(record.misc, expected.misc);
    assert_eq!(record.nickname_string(), "SPARKY");
    // Derived from experience and the placeholder species, same as extract_box.
    assert_eq!(record.party.level, 50);
    assert_eq!(record.party.total_hp, 107);
    assert_eq!(record.party.current_hp, 0);
}

#[test]
fn out_of_range_box_or_slot_is_empty() {
    let region = parse().box_region().expect("box region");
    let extractor = BoxExtractor::new(&region);
    let tables = DataTables::builtin();

    assert!(extractor.extract_slot(8, 30, &tables).is_none());
    assert!(extractor.extract_slot(15, 0, &tables).is_none());
    assert!(extractor.slot_bytes(0, SLOTS_PER_BOX).is_none());
    assert!(extractor.box_bytes(BOX_COUNT).is_none());

    let empty = extractor.extract_box(15, &tables);
    assert!(empty.slots.is_empty());
    assert_eq!(empty.occupied().count(), 0);
}

#[test]
fn record_straddling_two_sections_reassembles() {
    // Box 1 slot 19 covers stream bytes 3920..4000; section 5 ends at 3964.
    let region = parse().box_region().expect("box region");
    let extractor = BoxExtractor::new(&region);
    let record = extractor
        .extract_slot(1, 19, &DataTables::builtin())
        .expect("in range");
    assert_eq!(record.growth, sample_record().growth);
}

#[test]
fn extract_box_decodes_every_slot_and_derives_stats() {
    let region = parse().box_region().expect("box region");
    let extractor = BoxExtractor::new(&region);
    let tables = DataTables::builtin();

    let first = extractor.extract_box(0, &tables);
    assert_eq!(first.number, 0);
    assert_eq!(first.slots.len(), SLOTS_PER_BOX);
    assert_eq!(first.name_string(), "MAIN");
    assert_eq!(first.wallpaper, 3);

    let occupied: Vec<usize> = first.occupied().map(|(slot, _)| slot).collect();
    assert_eq!(occupied, vec![0]);

    // Placeholder species has zero base stats and the medium-fast curve.
    let creature = &first.slots[0];
    assert_eq!(creature.party.level, 50);
    assert_eq!(creature.party.total_hp, 107);
    assert!(first.slots[1].is_blank());
    assert_eq!(first.slots[1].party.level, 0);

    let last = extractor.extract_box(8, &tables);
    assert_eq!(last.wallpaper, 11);
    assert_eq!(last.name_string(), "");
    assert_eq!(last.occupied().map(|(slot, _)| slot).collect::<Vec<_>>(), vec![29]);

    assert_eq!(extractor.extract_all(&tables).len(), BOX_COUNT);
    assert_eq!(extractor.current_box(), 4);
}
