use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use pk3_core::boxes::{BOX_COUNT, SLOTS_PER_BOX};
use pk3_core::creature::{BOX_RECORD_SIZE, PARTY_RECORD_SIZE};
use pk3_core::save::SaveContainer;
use pk3_core::stats;
use pk3_core::text::{Charset, GameText};
use pk3_core::{
    BoxExtractor, CodecError, CodecErrorCode, CreatureRecord, DataTables, Encryption, RecordLayout,
};
use pk3_render::{
    FieldSelection, RenderOptions, box_to_json, creature_json_selected, creature_to_json,
    inventory_to_json, layout_to_json, party_to_text, render_box_text, render_creature_text,
    render_inventory_text, render_layout_text, render_sections_text, render_trainer_text,
    sections_to_json, trainer_to_json,
};
use serde_json::{Map as JsonMap, Value as JsonValue};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// Plaintext standalone creature.
    Pk3,
    /// Encrypted standalone creature.
    Ek3,
    /// Full save image.
    Sav,
}

impl FormatArg {
    fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pk3" => Some(Self::Pk3),
            "ek3" => Some(Self::Ek3),
            "sav" => Some(Self::Sav),
            _ => None,
        }
    }

    fn encryption(self) -> Option<Encryption> {
        match self {
            Self::Pk3 => Some(Encryption::Plaintext),
            Self::Ek3 => Some(Encryption::Encrypted),
            Self::Sav => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CharsetArg {
    Western,
    Japanese,
}

impl From<CharsetArg> for Charset {
    fn from(arg: CharsetArg) -> Self {
        match arg {
            CharsetArg::Western => Charset::Western,
            CharsetArg::Japanese => Charset::Japanese,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(value_name = "FILE.pk3|FILE.ek3|FILE.sav")]
    path: PathBuf,
    /// Overrides detection by file extension.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
    #[arg(long, value_enum)]
    charset: Option<CharsetArg>,
    /// JSON data tables with species, natures and names.
    #[arg(long, value_name = "FILE.json")]
    data: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(short, long)]
    verbose: bool,

    #[arg(long)]
    pid: bool,
    #[arg(long)]
    otid: bool,
    #[arg(long)]
    nickname: bool,
    #[arg(long = "trainer-name")]
    trainer_name: bool,
    #[arg(long)]
    species: bool,
    #[arg(long = "held-item")]
    held_item: bool,
    #[arg(long)]
    experience: bool,
    #[arg(long)]
    level: bool,
    #[arg(long)]
    friendship: bool,
    #[arg(long)]
    nature: bool,
    #[arg(long)]
    moves: bool,
    #[arg(long)]
    evs: bool,
    #[arg(long)]
    ivs: bool,
    #[arg(long)]
    stats: bool,
    #[arg(long)]
    met: bool,
    #[arg(long)]
    ribbons: bool,

    #[arg(long)]
    trainer: bool,
    #[arg(long)]
    party: bool,
    #[arg(long)]
    inventory: bool,
    /// Box number, 1 through 9.
    #[arg(long = "box", value_name = "N")]
    box_number: Option<usize>,
    /// Slot number within `--box`, 1 through 30.
    #[arg(long, value_name = "N", requires = "box_number")]
    slot: Option<usize>,
    #[arg(long)]
    sections: bool,
    #[arg(long)]
    layout: bool,

    #[arg(long = "set-nickname")]
    set_nickname: Option<String>,
    #[arg(long = "set-trainer-name")]
    set_trainer_name: Option<String>,
    #[arg(long = "set-species")]
    set_species: Option<u16>,
    #[arg(long = "set-item")]
    set_item: Option<u16>,
    #[arg(long = "set-exp")]
    set_exp: Option<u32>,
    #[arg(long = "set-friendship")]
    set_friendship: Option<u8>,
    /// Write with the mail quirk: new PID stamped over the already ciphered record.
    #[arg(long = "mail-pid", value_parser = parse_u32, requires = "mail_otid")]
    mail_pid: Option<u32>,
    #[arg(long = "mail-otid", value_parser = parse_u32, requires = "mail_pid")]
    mail_otid: Option<u32>,
    /// Destination; `.pk3` writes plaintext, `.ek3` writes encrypted.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn parse_u32(raw: &str) -> Result<u32, String> {
    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => raw.parse::<u32>(),
    };
    parsed.map_err(|e| format!("invalid 32-bit value '{raw}': {e}"))
}

impl Cli {
    fn field_selection(&self) -> FieldSelection {
        FieldSelection {
            pid: self.pid,
            otid: self.otid,
            nickname: self.nickname,
            trainer_name: self.trainer_name,
            species: self.species,
            held_item: self.held_item,
            experience: self.experience,
            level: self.level,
            friendship: self.friendship,
            nature: self.nature,
            moves: self.moves,
            evs: self.evs,
            ivs: self.ivs,
            stats: self.stats,
            met: self.met,
            ribbons: self.ribbons,
        }
    }

    fn has_edits(&self) -> bool {
        self.set_nickname.is_some()
            || self.set_trainer_name.is_some()
            || self.set_species.is_some()
            || self.set_item.is_some()
            || self.set_exp.is_some()
            || self.set_friendship.is_some()
            || self.mail_pid.is_some()
    }

    fn has_save_views(&self) -> bool {
        self.trainer
            || self.party
            || self.inventory
            || self.box_number.is_some()
            || self.sections
            || self.layout
    }

    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            charset: self.charset.map(Charset::from),
            verbose: self.verbose,
        }
    }
}

fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::from_default_env();
    if verbose || std::env::var_os("RUST_LOG").is_none() {
        let directive = if verbose {
            "pk3_core=debug"
        } else {
            "pk3_core=warn"
        };
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(context: &str, e: impl std::fmt::Display) -> ! {
    eprintln!("{context}: {e}");
    process::exit(1);
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(2);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format = cli
        .format
        .or_else(|| FormatArg::from_path(&cli.path))
        .unwrap_or_else(|| {
            usage_error(&format!(
                "cannot tell the format of {}; pass --format pk3|ek3|sav",
                cli.path.display()
            ))
        });

    let tables = match &cli.data {
        Some(path) => DataTables::from_path(path)
            .unwrap_or_else(|e| fail(&format!("Error loading {}", path.display()), e)),
        None => DataTables::builtin(),
    };

    let bytes = fs::read(&cli.path)
        .unwrap_or_else(|e| fail(&format!("Error reading {}", cli.path.display()), e));

    match format.encryption() {
        Some(encryption) => run_creature(&cli, &bytes, encryption, &tables),
        None => run_save(&cli, &bytes, &tables),
    }
}

// ---------------------------------------------------------------------------
// Standalone creature files
// ---------------------------------------------------------------------------

fn decode_creature(
    bytes: &[u8],
    encryption: Encryption,
) -> Result<(CreatureRecord, RecordLayout), CodecError> {
    let layout = match bytes.len() {
        PARTY_RECORD_SIZE => RecordLayout::Party,
        BOX_RECORD_SIZE => RecordLayout::Boxed,
        other => {
            return Err(CodecError::new(
                CodecErrorCode::SizeMismatch,
                format!(
                    "creature files are {PARTY_RECORD_SIZE} or {BOX_RECORD_SIZE} bytes, got {other}"
                ),
            ));
        }
    };
    let record = CreatureRecord::decode(bytes, layout, encryption)?;
    Ok((record, layout))
}

fn apply_edits(
    cli: &Cli,
    record: &mut CreatureRecord,
    tables: &DataTables,
) -> Result<(), CodecError> {
    // Names follow the record's language unless --charset forces one.
    let forced = cli.charset.map(Charset::from);
    if let Some(name) = &cli.set_nickname {
        match forced {
            Some(charset) => record.nickname = GameText::encode(name, charset)?,
            None => record.set_nickname(name)?,
        }
    }
    if let Some(name) = &cli.set_trainer_name {
        match forced {
            Some(charset) => record.trainer_name = GameText::encode(name, charset)?,
            None => record.set_trainer_name(name)?,
        }
    }
    if let Some(item) = cli.set_item {
        record.growth.held_item = item;
    }
    if let Some(friendship) = cli.set_friendship {
        record.growth.friendship = friendship;
    }
    let mut rederive = false;
    if let Some(species) = cli.set_species {
        record.growth.species = species;
        rederive = true;
    }
    if let Some(exp) = cli.set_exp {
        record.growth.experience = exp;
        rederive = true;
    }
    if rederive {
        stats::populate(record, tables);
    }
    Ok(())
}

fn output_encryption(path: &Path) -> Encryption {
    match FormatArg::from_path(path).and_then(FormatArg::encryption) {
        Some(encryption) => encryption,
        None => usage_error(&format!(
            "--output must end in .pk3 or .ek3: {}",
            path.display()
        )),
    }
}

fn write_creature(
    path: &Path,
    record: &CreatureRecord,
    layout: RecordLayout,
    mail: Option<(u32, u32)>,
) -> Result<(), CodecError> {
    let bytes = match mail {
        Some((pid, otid)) => {
            let mut out = record.encode_with_mail(pid, otid)?;
            out.truncate(layout.size());
            out
        }
        None => record.encode(layout, output_encryption(path)),
    };
    fs::write(path, bytes)?;
    Ok(())
}

fn selected_pairs(value: &JsonValue) -> Vec<(String, String)> {
    let Some(map) = value.as_object() else {
        return Vec::new();
    };
    map.iter()
        .map(|(key, value)| {
            let text = match value {
                JsonValue::String(s) => s.clone(),
                JsonValue::Object(o) => match (o.get("id"), o.get("name")) {
                    (Some(id), Some(JsonValue::String(name))) => format!("{name} (#{id})"),
                    _ => value.to_string(),
                },
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect()
}

fn print_json(value: &JsonValue) {
    let rendered = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| fail("Error rendering JSON output", e));
    println!("{rendered}");
}

fn run_creature(cli: &Cli, bytes: &[u8], encryption: Encryption, tables: &DataTables) {
    if cli.has_save_views() {
        usage_error("--trainer/--party/--inventory/--box/--sections/--layout need a save image");
    }
    let has_edits = cli.has_edits();
    if has_edits && cli.output.is_none() {
        usage_error("--set-* and --mail-* flags require --output <PATH>");
    }

    let (mut record, layout) = decode_creature(bytes, encryption)
        .unwrap_or_else(|e| fail(&format!("Error decoding {}", cli.path.display()), e));
    if layout == RecordLayout::Boxed {
        stats::populate(&mut record, tables);
    }

    apply_edits(cli, &mut record, tables).unwrap_or_else(|e| fail("Error applying edit", e));

    if let Some(out_path) = &cli.output {
        let mail = cli.mail_pid.zip(cli.mail_otid);
        write_creature(out_path, &record, layout, mail)
            .unwrap_or_else(|e| fail(&format!("Error writing {}", out_path.display()), e));
    }

    let fields = cli.field_selection();
    let options = cli.render_options();

    if cli.json {
        let value = if fields.is_any_selected() {
            creature_json_selected(&record, &fields, tables, options)
        } else {
            creature_to_json(&record, tables, options)
        };
        print_json(&value);
        return;
    }

    if fields.is_any_selected() {
        let value = creature_json_selected(&record, &fields, tables, options);
        for (key, value) in selected_pairs(&value) {
            println!("{key}={value}");
        }
        return;
    }

    if let Some(out_path) = &cli.output {
        println!("Wrote {}", out_path.display());
        return;
    }

    print!("{}", render_creature_text(&record, tables, options));
}

// ---------------------------------------------------------------------------
// Save images
// ---------------------------------------------------------------------------

fn box_index(number: usize) -> usize {
    if number == 0 || number > BOX_COUNT {
        usage_error(&format!("--box takes 1 through {BOX_COUNT}, got {number}"));
    }
    number - 1
}

fn slot_index(number: usize) -> usize {
    if number == 0 || number > SLOTS_PER_BOX {
        usage_error(&format!("--slot takes 1 through {SLOTS_PER_BOX}, got {number}"));
    }
    number - 1
}

fn run_save(cli: &Cli, bytes: &[u8], tables: &DataTables) {
    if cli.has_edits() {
        usage_error("--set-* and --mail-* flags apply to .pk3/.ek3 files only");
    }
    if cli.field_selection().is_any_selected() {
        usage_error("creature field flags apply to .pk3/.ek3 files only");
    }
    if cli.output.is_some() && cli.slot.is_none() {
        usage_error("--output with a save image needs --box N --slot N");
    }
    let selected_box = cli.box_number.map(box_index);
    let selected_slot = cli.slot.map(slot_index);

    let save = SaveContainer::parse(bytes)
        .unwrap_or_else(|e| fail(&format!("Error parsing save file {}", cli.path.display()), e));
    let options = cli.render_options();

    if let (Some(index), Some(slot)) = (selected_box, selected_slot) {
        run_slot(cli, &save, index, slot, tables);
        return;
    }

    let explicit = cli.has_save_views();
    let show_trainer = cli.trainer || !explicit;
    let show_party = cli.party || !explicit;

    if cli.json {
        let mut out = JsonMap::new();
        out.insert(
            "generation".to_string(),
            JsonValue::String(save.active_generation().as_str().to_string()),
        );
        out.insert(
            "save_counter".to_string(),
            JsonValue::from(save.save_counter(save.active_generation())),
        );
        out.insert(
            "all_sections_valid".to_string(),
            JsonValue::Bool(save.all_sections_valid()),
        );
        if show_trainer {
            let info = save
                .trainer_info()
                .unwrap_or_else(|e| fail("Error reading trainer info", e));
            out.insert("trainer".to_string(), trainer_to_json(&info));
        }
        if show_party || cli.inventory {
            let inventory = save
                .inventory()
                .unwrap_or_else(|e| fail("Error reading inventory", e));
            if cli.inventory {
                out.insert(
                    "inventory".to_string(),
                    inventory_to_json(&inventory, tables, options),
                );
            } else {
                out.insert(
                    "party".to_string(),
                    JsonValue::Array(
                        inventory
                            .team()
                            .iter()
                            .map(|record| creature_to_json(record, tables, options))
                            .collect(),
                    ),
                );
            }
        }
        if let Some(index) = selected_box {
            let region = save
                .box_region()
                .unwrap_or_else(|e| fail("Error reading box storage", e));
            let pc_box = BoxExtractor::new(&region).extract_box(index, tables);
            out.insert("box".to_string(), box_to_json(&pc_box, tables, options));
        }
        if cli.sections {
            out.insert("sections".to_string(), sections_to_json(save.sections()));
        }
        if cli.layout {
            out.insert("layout".to_string(), layout_to_json(save.layout()));
        }
        print_json(&JsonValue::Object(out));
        return;
    }

    println!(
        "Active generation {} (save counter {})",
        save.active_generation(),
        save.save_counter(save.active_generation())
    );
    if !save.all_sections_valid() {
        println!("Warning: one or more sections failed validation (see --sections)");
    }
    if show_trainer {
        let info = save
            .trainer_info()
            .unwrap_or_else(|e| fail("Error reading trainer info", e));
        print!("{}", render_trainer_text(&info));
    }
    if show_party || cli.inventory {
        let inventory = save
            .inventory()
            .unwrap_or_else(|e| fail("Error reading inventory", e));
        if show_party {
            println!("Party ({}):", inventory.team().len());
            print!("{}", party_to_text(&inventory, tables, options));
        }
        if cli.inventory {
            print!("{}", render_inventory_text(&inventory, tables));
        }
    }
    if let Some(index) = selected_box {
        let region = save
            .box_region()
            .unwrap_or_else(|e| fail("Error reading box storage", e));
        let pc_box = BoxExtractor::new(&region).extract_box(index, tables);
        print!("{}", render_box_text(&pc_box, tables, options));
    }
    if cli.sections {
        print!("{}", render_sections_text(save.sections()));
    }
    if cli.layout {
        print!("{}", render_layout_text(save.layout()));
    }
}

fn run_slot(cli: &Cli, save: &SaveContainer, index: usize, slot: usize, tables: &DataTables) {
    let region = save
        .box_region()
        .unwrap_or_else(|e| fail("Error reading box storage", e));
    let pc_box = BoxExtractor::new(&region).extract_box(index, tables);
    let record = pc_box.slots.get(slot).cloned().unwrap_or_default();
    if record.is_blank() {
        fail(
            "Error exporting slot",
            format!("box {} slot {} is empty", index + 1, slot + 1),
        );
    }

    if let Some(out_path) = &cli.output {
        write_creature(out_path, &record, RecordLayout::Boxed, None)
            .unwrap_or_else(|e| fail(&format!("Error writing {}", out_path.display()), e));
    }

    let options = cli.render_options();
    if cli.json {
        print_json(&creature_to_json(&record, tables, options));
    } else if let Some(out_path) = &cli.output {
        println!("Wrote {}", out_path.display());
    } else {
        print!("{}", render_creature_text(&record, tables, options));
    }
}
