use std::fmt::Write as _;

use pk3_core::boxes::PcBox;
use pk3_core::creature::CreatureRecord;
use pk3_core::creature::substructure::{Ribbons, StatSpread};
use pk3_core::data::{self, GameData};
use pk3_core::layout::FileLayout;
use pk3_core::save::inventory::Inventory;
use pk3_core::save::section::Section;
use pk3_core::save::trainer::{TrainerGender, TrainerInfo};
use pk3_core::stats;
use pk3_core::text::Charset;
use serde_json::{Map as JsonMap, Value as JsonValue};

const LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Forces a charset for name fields instead of the record's language.
    pub charset: Option<Charset>,
    pub verbose: bool,
}

impl RenderOptions {
    fn charset_for(&self, record: &CreatureRecord) -> Charset {
        self.charset.unwrap_or_else(|| record.charset())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub pid: bool,
    pub otid: bool,
    pub nickname: bool,
    pub trainer_name: bool,
    pub species: bool,
    pub held_item: bool,
    pub experience: bool,
    pub level: bool,
    pub friendship: bool,
    pub nature: bool,
    pub moves: bool,
    pub evs: bool,
    pub ivs: bool,
    pub stats: bool,
    pub met: bool,
    pub ribbons: bool,
}

impl FieldSelection {
    pub fn is_any_selected(&self) -> bool {
        self.pid
            || self.otid
            || self.nickname
            || self.trainer_name
            || self.species
            || self.held_item
            || self.experience
            || self.level
            || self.friendship
            || self.nature
            || self.moves
            || self.evs
            || self.ivs
            || self.stats
            || self.met
            || self.ribbons
    }
}

fn push_line(out: &mut String, line: impl AsRef<str>) {
    out.push_str(line.as_ref());
    out.push('\n');
}

fn named_id(id: impl Into<JsonValue>, name: &str) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("id".to_string(), id.into());
    m.insert("name".to_string(), JsonValue::String(name.to_string()));
    JsonValue::Object(m)
}

fn spread_to_json(spread: &StatSpread) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("hp".to_string(), JsonValue::from(spread.hp));
    m.insert("attack".to_string(), JsonValue::from(spread.attack));
    m.insert("defense".to_string(), JsonValue::from(spread.defense));
    m.insert("speed".to_string(), JsonValue::from(spread.speed));
    m.insert("sp_attack".to_string(), JsonValue::from(spread.sp_attack));
    m.insert("sp_defense".to_string(), JsonValue::from(spread.sp_defense));
    JsonValue::Object(m)
}

fn moves_to_json(record: &CreatureRecord, data: &dyn GameData) -> JsonValue {
    JsonValue::Array(
        record
            .attacks
            .moves
            .iter()
            .zip(record.attacks.pp.iter())
            .enumerate()
            .filter(|(_, (id, _))| **id != 0)
            .map(|(slot, (&id, &pp))| {
                let mut m = JsonMap::new();
                m.insert("id".to_string(), JsonValue::from(id));
                m.insert(
                    "name".to_string(),
                    JsonValue::String(data.move_display(id).to_string()),
                );
                m.insert("pp".to_string(), JsonValue::from(pp));
                m.insert(
                    "pp_bonus".to_string(),
                    JsonValue::from(record.growth.pp_bonus(slot)),
                );
                JsonValue::Object(m)
            })
            .collect(),
    )
}

fn party_stats_to_json(record: &CreatureRecord) -> JsonValue {
    let p = &record.party;
    let mut m = JsonMap::new();
    m.insert("status".to_string(), JsonValue::from(p.status));
    m.insert("current_hp".to_string(), JsonValue::from(p.current_hp));
    m.insert("total_hp".to_string(), JsonValue::from(p.total_hp));
    m.insert("attack".to_string(), JsonValue::from(p.attack));
    m.insert("defense".to_string(), JsonValue::from(p.defense));
    m.insert("speed".to_string(), JsonValue::from(p.speed));
    m.insert("sp_attack".to_string(), JsonValue::from(p.sp_attack));
    m.insert("sp_defense".to_string(), JsonValue::from(p.sp_defense));
    m.insert("mail_id".to_string(), JsonValue::from(p.mail_id));
    JsonValue::Object(m)
}

fn met_to_json(record: &CreatureRecord, data: &dyn GameData) -> JsonValue {
    let origin = &record.misc.origin;
    let mut m = JsonMap::new();
    m.insert(
        "location".to_string(),
        named_id(
            record.misc.met_location,
            data.location_display(record.misc.met_location),
        ),
    );
    m.insert("level".to_string(), JsonValue::from(origin.met_level));
    m.insert(
        "game".to_string(),
        named_id(origin.met_game, data::origin_game_name(origin.met_game)),
    );
    m.insert(
        "ball".to_string(),
        named_id(origin.ball, data::ball_name(origin.ball)),
    );
    m.insert(
        "trainer_gender".to_string(),
        JsonValue::String(TrainerGender::from_bit(origin.trainer_gender).as_str().to_string()),
    );
    JsonValue::Object(m)
}

fn ribbon_flags(ribbons: &Ribbons) -> [(&'static str, bool); 13] {
    [
        ("champion", ribbons.champion),
        ("winning", ribbons.winning),
        ("victory", ribbons.victory),
        ("artist", ribbons.artist),
        ("effort", ribbons.effort),
        ("battle_champion", ribbons.battle_champion),
        ("regional_champion", ribbons.regional_champion),
        ("national_champion", ribbons.national_champion),
        ("country", ribbons.country),
        ("national", ribbons.national),
        ("earth", ribbons.earth),
        ("world", ribbons.world),
        ("fateful_encounter", ribbons.fateful_encounter),
    ]
}

fn ribbons_to_json(ribbons: &Ribbons) -> JsonValue {
    let mut ranks = JsonMap::new();
    ranks.insert("cool".to_string(), JsonValue::from(ribbons.cool));
    ranks.insert("beauty".to_string(), JsonValue::from(ribbons.beauty));
    ranks.insert("cute".to_string(), JsonValue::from(ribbons.cute));
    ranks.insert("smart".to_string(), JsonValue::from(ribbons.smart));
    ranks.insert("tough".to_string(), JsonValue::from(ribbons.tough));

    let mut m = JsonMap::new();
    m.insert("count".to_string(), JsonValue::from(ribbons.count()));
    m.insert("contest".to_string(), JsonValue::Object(ranks));
    m.insert(
        "earned".to_string(),
        JsonValue::Array(
            ribbon_flags(ribbons)
                .iter()
                .filter(|(_, held)| *held)
                .map(|(name, _)| JsonValue::String((*name).to_string()))
                .collect(),
        ),
    );
    JsonValue::Object(m)
}

fn contest_to_json(record: &CreatureRecord) -> JsonValue {
    let c = &record.condition;
    let mut m = JsonMap::new();
    m.insert("cool".to_string(), JsonValue::from(c.cool));
    m.insert("beauty".to_string(), JsonValue::from(c.beauty));
    m.insert("cute".to_string(), JsonValue::from(c.cute));
    m.insert("smart".to_string(), JsonValue::from(c.smart));
    m.insert("tough".to_string(), JsonValue::from(c.tough));
    m.insert("sheen".to_string(), JsonValue::from(c.sheen));
    JsonValue::Object(m)
}

fn flags_to_json(record: &CreatureRecord) -> JsonValue {
    let flags = record.record_flags();
    let mut m = JsonMap::new();
    m.insert("bad_egg".to_string(), JsonValue::Bool(flags.bad_egg));
    m.insert("has_species".to_string(), JsonValue::Bool(flags.has_species));
    m.insert("use_egg_name".to_string(), JsonValue::Bool(flags.use_egg_name));
    m.insert("block_box".to_string(), JsonValue::Bool(flags.block_box));
    JsonValue::Object(m)
}

/// Every field of a record in canonical key order.
pub fn creature_to_json(
    record: &CreatureRecord,
    data: &dyn GameData,
    options: RenderOptions,
) -> JsonValue {
    let charset = options.charset_for(record);
    let mut out = JsonMap::new();

    out.insert("pid".to_string(), JsonValue::from(record.pid));
    out.insert("otid".to_string(), JsonValue::from(record.otid));
    out.insert("trainer_id".to_string(), JsonValue::from(record.trainer_id()));
    out.insert("secret_id".to_string(), JsonValue::from(record.secret_id()));
    out.insert(
        "nickname".to_string(),
        JsonValue::String(record.nickname.decode(charset)),
    );
    out.insert(
        "trainer_name".to_string(),
        JsonValue::String(record.trainer_name.decode(charset)),
    );
    out.insert(
        "language".to_string(),
        named_id(record.language, record.language().as_str()),
    );
    out.insert(
        "species".to_string(),
        named_id(record.growth.species, data.species_name(record.growth.species)),
    );
    out.insert(
        "held_item".to_string(),
        named_id(record.growth.held_item, data.item_display(record.growth.held_item)),
    );
    out.insert(
        "experience".to_string(),
        JsonValue::from(record.growth.experience),
    );
    out.insert("level".to_string(), JsonValue::from(record.party.level));
    out.insert(
        "nature".to_string(),
        named_id(record.nature_index(), data.nature_name(record.nature_index())),
    );
    out.insert(
        "gender".to_string(),
        JsonValue::String(stats::gender(record, data).to_string()),
    );
    out.insert("shiny".to_string(), JsonValue::Bool(record.is_shiny()));
    out.insert("egg".to_string(), JsonValue::Bool(record.is_egg()));
    out.insert(
        "friendship".to_string(),
        JsonValue::from(record.growth.friendship),
    );
    out.insert(
        "ability_slot".to_string(),
        JsonValue::from(record.misc.genes.ability_slot),
    );
    out.insert("markings".to_string(), JsonValue::from(record.markings));
    out.insert("flags".to_string(), flags_to_json(record));
    out.insert(
        "order".to_string(),
        JsonValue::String(record.order_name().to_string()),
    );
    out.insert("checksum".to_string(), JsonValue::from(record.checksum));
    out.insert(
        "checksum_valid".to_string(),
        JsonValue::Bool(record.checksum_matches()),
    );
    out.insert("moves".to_string(), moves_to_json(record, data));
    out.insert("evs".to_string(), spread_to_json(&record.condition.evs));
    out.insert("ivs".to_string(), spread_to_json(&record.misc.genes.ivs));
    out.insert("contest".to_string(), contest_to_json(record));
    out.insert("pokerus".to_string(), JsonValue::from(record.misc.pokerus));
    out.insert("met".to_string(), met_to_json(record, data));
    out.insert("ribbons".to_string(), ribbons_to_json(&record.misc.ribbons));
    out.insert("stats".to_string(), party_stats_to_json(record));

    JsonValue::Object(out)
}

/// Only the selected fields, in the same relative order as [`creature_to_json`].
pub fn creature_json_selected(
    record: &CreatureRecord,
    fields: &FieldSelection,
    data: &dyn GameData,
    options: RenderOptions,
) -> JsonValue {
    let charset = options.charset_for(record);
    let mut out = JsonMap::new();

    if fields.pid {
        out.insert("pid".to_string(), JsonValue::from(record.pid));
    }
    if fields.otid {
        out.insert("otid".to_string(), JsonValue::from(record.otid));
    }
    if fields.nickname {
        out.insert(
            "nickname".to_string(),
            JsonValue::String(record.nickname.decode(charset)),
        );
    }
    if fields.trainer_name {
        out.insert(
            "trainer_name".to_string(),
            JsonValue::String(record.trainer_name.decode(charset)),
        );
    }
    if fields.species {
        out.insert(
            "species".to_string(),
            named_id(record.growth.species, data.species_name(record.growth.species)),
        );
    }
    if fields.held_item {
        out.insert(
            "held_item".to_string(),
            named_id(record.growth.held_item, data.item_display(record.growth.held_item)),
        );
    }
    if fields.experience {
        out.insert(
            "experience".to_string(),
            JsonValue::from(record.growth.experience),
        );
    }
    if fields.level {
        out.insert("level".to_string(), JsonValue::from(record.party.level));
    }
    if fields.nature {
        out.insert(
            "nature".to_string(),
            named_id(record.nature_index(), data.nature_name(record.nature_index())),
        );
    }
    if fields.friendship {
        out.insert(
            "friendship".to_string(),
            JsonValue::from(record.growth.friendship),
        );
    }
    if fields.moves {
        out.insert("moves".to_string(), moves_to_json(record, data));
    }
    if fields.evs {
        out.insert("evs".to_string(), spread_to_json(&record.condition.evs));
    }
    if fields.ivs {
        out.insert("ivs".to_string(), spread_to_json(&record.misc.genes.ivs));
    }
    if fields.met {
        out.insert("met".to_string(), met_to_json(record, data));
    }
    if fields.ribbons {
        out.insert("ribbons".to_string(), ribbons_to_json(&record.misc.ribbons));
    }
    if fields.stats {
        out.insert("stats".to_string(), party_stats_to_json(record));
    }

    JsonValue::Object(out)
}

fn spread_line(label: &str, s: &StatSpread) -> String {
    format!(
        "  {label:<LABEL_WIDTH$}HP {:>3}  Atk {:>3}  Def {:>3}  Spe {:>3}  SpA {:>3}  SpD {:>3}",
        s.hp, s.attack, s.defense, s.speed, s.sp_attack, s.sp_defense
    )
}

pub fn render_creature_text(
    record: &CreatureRecord,
    data: &dyn GameData,
    options: RenderOptions,
) -> String {
    if record.is_blank() {
        return "(empty)\n".to_string();
    }

    let charset = options.charset_for(record);
    let mut out = String::new();
    let species = data.species_name(record.growth.species);
    let mut headline = format!(
        "{} ({species})  Lv. {}  {}  {}",
        record.nickname.display(charset),
        record.party.level,
        data.nature_name(record.nature_index()),
        stats::gender(record, data),
    );
    if record.is_shiny() {
        headline.push_str("  *shiny*");
    }
    if record.is_egg() {
        headline.push_str("  [egg]");
    }
    push_line(&mut out, headline);

    push_line(
        &mut out,
        format!(
            "  {:<LABEL_WIDTH$}{} (TID {:05} / SID {:05})  {}",
            "OT:",
            record.trainer_name.display(charset),
            record.trainer_id(),
            record.secret_id(),
            record.language(),
        ),
    );
    push_line(
        &mut out,
        format!(
            "  {:<LABEL_WIDTH$}{} (#{})  Exp: {}  Friendship: {}",
            "Item:",
            data.item_display(record.growth.held_item),
            record.growth.held_item,
            record.growth.experience,
            record.growth.friendship,
        ),
    );

    let mut moves = String::new();
    for (slot, (&id, &pp)) in record
        .attacks
        .moves
        .iter()
        .zip(record.attacks.pp.iter())
        .enumerate()
    {
        if id == 0 {
            continue;
        }
        if !moves.is_empty() {
            moves.push_str(", ");
        }
        let _ = write!(moves, "{} ({pp} PP", data.move_display(id));
        if record.growth.pp_bonus(slot) > 0 {
            let _ = write!(moves, ", +{}", record.growth.pp_bonus(slot));
        }
        moves.push(')');
    }
    push_line(&mut out, format!("  {:<LABEL_WIDTH$}{}", "Moves:", moves));

    let p = &record.party;
    push_line(
        &mut out,
        format!(
            "  {:<LABEL_WIDTH$}HP {}/{}  Atk {}  Def {}  Spe {}  SpA {}  SpD {}",
            "Stats:",
            p.current_hp,
            p.total_hp,
            p.attack,
            p.defense,
            p.speed,
            p.sp_attack,
            p.sp_defense
        ),
    );
    push_line(&mut out, spread_line("EVs:", &record.condition.evs));
    push_line(&mut out, spread_line("IVs:", &record.misc.genes.ivs));

    let origin = &record.misc.origin;
    push_line(
        &mut out,
        format!(
            "  {:<LABEL_WIDTH$}{} at Lv. {} ({}, {})",
            "Met:",
            data.location_display(record.misc.met_location),
            origin.met_level,
            data::origin_game_name(origin.met_game),
            data::ball_name(origin.ball),
        ),
    );
    push_line(
        &mut out,
        format!(
            "  {:<LABEL_WIDTH$}{}",
            "Ribbons:",
            record.misc.ribbons.count()
        ),
    );

    if options.verbose {
        push_line(
            &mut out,
            format!(
                "  {:<LABEL_WIDTH$}PID {:#010X}  OTID {:#010X}  Order {}  Checksum {:#06X} ({})",
                "Raw:",
                record.pid,
                record.otid,
                record.order_name(),
                record.checksum,
                if record.checksum_matches() { "ok" } else { "mismatch" },
            ),
        );
    }

    out
}

pub fn trainer_to_json(info: &TrainerInfo) -> JsonValue {
    let mut play_time = JsonMap::new();
    play_time.insert("hours".to_string(), JsonValue::from(info.play_time.hours));
    play_time.insert("minutes".to_string(), JsonValue::from(info.play_time.minutes));
    play_time.insert("seconds".to_string(), JsonValue::from(info.play_time.seconds));
    play_time.insert("frames".to_string(), JsonValue::from(info.play_time.frames));

    let mut options = JsonMap::new();
    options.insert(
        "button_mode".to_string(),
        JsonValue::String(info.options.button_mode().as_str().to_string()),
    );
    options.insert(
        "text_speed".to_string(),
        JsonValue::String(info.options.text_speed().as_str().to_string()),
    );
    options.insert(
        "window_frame".to_string(),
        JsonValue::from(info.options.window_frame()),
    );
    options.insert(
        "sound".to_string(),
        JsonValue::String(if info.options.stereo() { "Stereo" } else { "Mono" }.to_string()),
    );
    options.insert(
        "battle_style".to_string(),
        JsonValue::String(if info.options.battle_style_set() { "Set" } else { "Shift" }.to_string()),
    );
    options.insert(
        "battle_scene".to_string(),
        JsonValue::Bool(!info.options.battle_scene_off()),
    );

    let mut out = JsonMap::new();
    out.insert("name".to_string(), JsonValue::String(info.name_string()));
    out.insert(
        "gender".to_string(),
        JsonValue::String(info.gender.to_string()),
    );
    out.insert("trainer_id".to_string(), JsonValue::from(info.trainer_id));
    out.insert("secret_id".to_string(), JsonValue::from(info.secret_id));
    out.insert("play_time".to_string(), JsonValue::Object(play_time));
    out.insert("options".to_string(), JsonValue::Object(options));
    out.insert(
        "game".to_string(),
        JsonValue::String(info.variant.to_string()),
    );
    out.insert("game_code".to_string(), JsonValue::from(info.game_code));
    out.insert(
        "security_key".to_string(),
        JsonValue::from(info.security_key),
    );
    JsonValue::Object(out)
}

pub fn render_trainer_text(info: &TrainerInfo) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("{:<LABEL_WIDTH$}{}", "Trainer:", info.name_string()));
    push_line(&mut out, format!("{:<LABEL_WIDTH$}{}", "Gender:", info.gender));
    push_line(
        &mut out,
        format!(
            "{:<LABEL_WIDTH$}{:05} / {:05}",
            "TID / SID:", info.trainer_id, info.secret_id
        ),
    );
    push_line(&mut out, format!("{:<LABEL_WIDTH$}{}", "Play time:", info.play_time));
    push_line(&mut out, format!("{:<LABEL_WIDTH$}{}", "Game:", info.variant));
    push_line(
        &mut out,
        format!(
            "{:<LABEL_WIDTH$}text {}, frame {}, {}",
            "Options:",
            info.options.text_speed().as_str(),
            info.options.window_frame() + 1,
            if info.options.stereo() { "stereo" } else { "mono" },
        ),
    );
    out
}

pub fn inventory_to_json(
    inventory: &Inventory,
    data: &dyn GameData,
    options: RenderOptions,
) -> JsonValue {
    let mut pockets = JsonMap::new();
    for pocket in &inventory.pockets {
        pockets.insert(
            pocket.kind.as_str().to_string(),
            JsonValue::Array(
                pocket
                    .occupied()
                    .map(|slot| {
                        let mut m = JsonMap::new();
                        m.insert("id".to_string(), JsonValue::from(slot.item));
                        m.insert(
                            "name".to_string(),
                            JsonValue::String(data.item_display(slot.item).to_string()),
                        );
                        m.insert("quantity".to_string(), JsonValue::from(slot.quantity));
                        JsonValue::Object(m)
                    })
                    .collect(),
            ),
        );
    }

    let mut out = JsonMap::new();
    out.insert("team_size".to_string(), JsonValue::from(inventory.team_size));
    out.insert(
        "party".to_string(),
        JsonValue::Array(
            inventory
                .team()
                .iter()
                .map(|record| creature_to_json(record, data, options))
                .collect(),
        ),
    );
    out.insert("money".to_string(), JsonValue::from(inventory.money));
    out.insert("coins".to_string(), JsonValue::from(inventory.coins));
    out.insert("pockets".to_string(), JsonValue::Object(pockets));
    JsonValue::Object(out)
}

pub fn render_inventory_text(inventory: &Inventory, data: &dyn GameData) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("{:<LABEL_WIDTH$}{}", "Money:", inventory.money));
    push_line(&mut out, format!("{:<LABEL_WIDTH$}{}", "Coins:", inventory.coins));
    for pocket in &inventory.pockets {
        let items: Vec<String> = pocket
            .occupied()
            .map(|slot| format!("{} x{}", data.item_display(slot.item), slot.quantity))
            .collect();
        let listed = if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        };
        push_line(
            &mut out,
            format!("{:<LABEL_WIDTH$}{}", format!("{}:", pocket.kind.as_str()), listed),
        );
    }
    out
}

pub fn party_to_text(inventory: &Inventory, data: &dyn GameData, options: RenderOptions) -> String {
    let mut out = String::new();
    for (i, record) in inventory.team().iter().enumerate() {
        let _ = write!(out, "[{}] ", i + 1);
        out.push_str(&render_creature_text(record, data, options));
    }
    if out.is_empty() {
        push_line(&mut out, "(no party members)");
    }
    out
}

pub fn box_to_json(pc_box: &PcBox, data: &dyn GameData, options: RenderOptions) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("number".to_string(), JsonValue::from(pc_box.number));
    out.insert("name".to_string(), JsonValue::String(pc_box.name_string()));
    out.insert("wallpaper".to_string(), JsonValue::from(pc_box.wallpaper));
    out.insert(
        "slots".to_string(),
        JsonValue::Array(
            pc_box
                .occupied()
                .map(|(slot, record)| {
                    let mut m = JsonMap::new();
                    m.insert("slot".to_string(), JsonValue::from(slot));
                    m.insert(
                        "creature".to_string(),
                        creature_to_json(record, data, options),
                    );
                    JsonValue::Object(m)
                })
                .collect(),
        ),
    );
    JsonValue::Object(out)
}

pub fn render_box_text(pc_box: &PcBox, data: &dyn GameData, options: RenderOptions) -> String {
    let mut out = String::new();
    let name = pc_box.name_string();
    push_line(
        &mut out,
        format!(
            "Box {} \"{}\" (wallpaper {})",
            pc_box.number + 1,
            name.trim_end(),
            pc_box.wallpaper
        ),
    );
    let mut any = false;
    for (slot, record) in pc_box.occupied() {
        any = true;
        let _ = write!(out, "  {:>2}: ", slot + 1);
        out.push_str(&render_creature_text(record, data, options));
    }
    if !any {
        push_line(&mut out, "  (empty)");
    }
    out
}

pub fn sections_to_json(sections: &[Section]) -> JsonValue {
    JsonValue::Array(
        sections
            .iter()
            .map(|s| {
                let mut m = JsonMap::new();
                m.insert("slot".to_string(), JsonValue::from(s.slot));
                m.insert("id".to_string(), JsonValue::from(s.id));
                m.insert("save_counter".to_string(), JsonValue::from(s.save_counter));
                m.insert(
                    "signature_valid".to_string(),
                    JsonValue::Bool(s.signature_valid()),
                );
                m.insert(
                    "stored_checksum".to_string(),
                    JsonValue::from(s.stored_checksum),
                );
                m.insert(
                    "computed_checksum".to_string(),
                    match s.computed_checksum {
                        Some(v) => JsonValue::from(v),
                        None => JsonValue::Null,
                    },
                );
                m.insert("valid".to_string(), JsonValue::Bool(s.is_valid()));
                JsonValue::Object(m)
            })
            .collect(),
    )
}

pub fn render_sections_text(sections: &[Section]) -> String {
    let mut out = String::new();
    push_line(&mut out, "slot  id  counter     stored  computed  status");
    for s in sections {
        let computed = match s.computed_checksum {
            Some(v) => format!("{v:#06X}"),
            None => "-".to_string(),
        };
        let status = match (s.signature_valid(), s.checksum_valid()) {
            (true, true) => "ok",
            (false, _) => "bad signature",
            (true, false) => "bad checksum",
        };
        push_line(
            &mut out,
            format!(
                "{:>4}  {:>2}  {:>7}  {:#06X}  {:>8}  {}",
                s.slot, s.id, s.save_counter, s.stored_checksum, computed, status
            ),
        );
    }
    out
}

pub fn layout_to_json(layout: &FileLayout) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert("file_len".to_string(), JsonValue::from(layout.file_len));
    out.insert(
        "regions".to_string(),
        JsonValue::Array(
            layout
                .regions
                .iter()
                .map(|r| {
                    let mut m = JsonMap::new();
                    m.insert("id".to_string(), JsonValue::String(r.id.as_str().to_string()));
                    m.insert("start".to_string(), JsonValue::from(r.range.start));
                    m.insert("end".to_string(), JsonValue::from(r.range.end));
                    JsonValue::Object(m)
                })
                .collect(),
        ),
    );
    JsonValue::Object(out)
}

pub fn render_layout_text(layout: &FileLayout) -> String {
    let mut out = String::new();
    push_line(&mut out, format!("file_len={:#x}", layout.file_len));
    for r in &layout.regions {
        push_line(
            &mut out,
            format!(
                "{:<16} {:#07x}..{:#07x} ({} bytes)",
                r.id.as_str(),
                r.range.start,
                r.range.end,
                r.range.len()
            ),
        );
    }
    out
}
