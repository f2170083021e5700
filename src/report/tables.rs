use crate::debug_fn;
use crate::error::SceneError;
use crate::report::{Cell, ReportTable, SceneReport};
use crate::routing::{FamilyProfile, Resolver};
use crate::scene::SceneDocument;
use crate::utils::{is_on, pad_id, parse_number};

const COMPACT_TITLE: &str = "X-Air Scene";

/// Number of FX return channels shown in the FX-1 table.
const FX_RETURN_CHANNELS: u32 = 8;
/// Number of insert-only FX slots shown in the FX-2 table.
const FX_INSERT_SLOTS: u32 = 4;

/// Builds report tables from a scene.
pub struct ReportBuilder<'a> {
    scene: &'a SceneDocument,
    profile: &'a FamilyProfile,
    resolver: Resolver<'a>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(scene: &'a SceneDocument, profile: &'a FamilyProfile) -> Self {
        Self {
            scene,
            profile,
            resolver: Resolver::new(scene, profile),
        }
    }

    pub fn build(&self) -> Result<SceneReport, SceneError> {
        let tables = if self.profile.compact_layout {
            vec![
                self.channel_table()?,
                self.bus_table()?,
                self.fx_insert_table()?,
                self.main_table()?,
            ]
        } else {
            vec![
                self.channel_table()?,
                self.bus_table()?,
                self.matrix_table()?,
                self.aux_table()?,
                self.main_table()?,
                self.fx_return_table()?,
                self.fx_insert_table()?,
            ]
        };
        debug_fn!(
            "build",
            "Built {} tables for '{}' using profile {}",
            tables.len(),
            self.scene.name,
            self.profile.name
        );

        Ok(SceneReport {
            title: self.title(),
            version: self.scene.version.clone(),
            profile: self.profile.name.clone(),
            tables,
        })
    }

    pub fn title(&self) -> String {
        if self.profile.compact_layout {
            return COMPACT_TITLE.to_string();
        }
        match self.scene.note() {
            Some(note) => format!("{} [{}]", self.scene.name, note),
            None => self.scene.name.clone(),
        }
    }

    pub fn channel_table(&self) -> Result<ReportTable, SceneError> {
        let mut table = ReportTable::new(
            "Channel",
            &["ch", "link", "name", "lowcut", "gate", "dyn", "insert", "physical"],
        );
        for id in 1..=self.section_len("ch")? {
            let ch = pad_id(id);
            let base = format!("ch/{}", ch);
            table.push_row(vec![
                Cell::text(ch),
                self.link("chlink", id)?.into(),
                self.name_cell(&base)?,
                self.flag(&format!("{}/preamp", base), 2)?.into(),
                self.flag(&format!("{}/gate", base), 0)?.into(),
                self.flag(&format!("{}/dyn", base), 0)?.into(),
                self.insert(&base)?.into(),
                self.physical(&base)?.into(),
            ]);
        }
        Ok(table)
    }

    pub fn aux_table(&self) -> Result<ReportTable, SceneError> {
        let mut table = ReportTable::new("Aux", &["ch", "link", "name", "physical"]);
        for id in 1..=self.section_len("auxin")? {
            let ch = self.key(id);
            let base = format!("auxin/{}", ch);
            table.push_row(vec![
                Cell::text(ch),
                self.link("auxlink", id)?.into(),
                self.name_cell(&base)?,
                self.physical(&base)?.into(),
            ]);
        }
        Ok(table)
    }

    pub fn bus_table(&self) -> Result<ReportTable, SceneError> {
        let mut table = ReportTable::new("Bus", &["ch", "link", "name", "dyn", "insert"]);
        for id in 1..=self.section_len("bus")? {
            let ch = self.key(id);
            let base = format!("bus/{}", ch);
            table.push_row(vec![
                Cell::text(ch),
                self.link("buslink", id)?.into(),
                self.name_cell(&base)?,
                self.flag(&format!("{}/dyn", base), 0)?.into(),
                self.insert(&base)?.into(),
            ]);
        }
        Ok(table)
    }

    pub fn matrix_table(&self) -> Result<ReportTable, SceneError> {
        let mut table = ReportTable::new("Matrix", &["ch", "link", "name", "insert"]);
        for id in 1..=self.section_len("mtx")? {
            let ch = self.key(id);
            let base = format!("mtx/{}", ch);
            table.push_row(vec![
                Cell::text(ch),
                self.link("mtxlink", id)?.into(),
                self.name_cell(&base)?,
                self.insert(&base)?.into(),
            ]);
        }
        Ok(table)
    }

    pub fn main_table(&self) -> Result<ReportTable, SceneError> {
        let mut table = ReportTable::new("Main", &["name", "dyn", "insert"]);
        let outputs: &[(&str, &str)] = if self.profile.compact_layout {
            &[("LR", "lr")]
        } else {
            &[("LR", "main/st"), ("M", "main/m")]
        };
        for (name, base) in outputs {
            table.push_row(vec![
                Cell::text(*name),
                self.flag(&format!("{}/dyn", base), 0)?.into(),
                self.insert(base)?.into(),
            ]);
        }
        Ok(table)
    }

    /// Stereo FX returns with the device loaded in each slot.
    pub fn fx_return_table(&self) -> Result<ReportTable, SceneError> {
        let mut table =
            ReportTable::new("FX-1", &["ch", "link", "name", "device", "type", "src"]);
        for id in 1..=FX_RETURN_CHANNELS {
            let ch = pad_id(id);
            let slot = (id + 1) / 2;
            let side = if id % 2 == 1 { "L" } else { "R" };
            let fx = format!("fx/{}", slot);
            let device = self.scene.value_at(&fx, 0)?;
            table.push_row(vec![
                Cell::text(format!("FX{}{}", slot, side)),
                self.link("fxlink", id)?.into(),
                self.name_cell(&format!("fxrtn/{}", ch))?,
                device.into(),
                self.fx_type(device).into(),
                self.scene
                    .value_at(&format!("{}/source", fx), ((id - 1) % 2) as usize)?
                    .into(),
            ]);
        }
        Ok(table)
    }

    /// FX slots that can only be used as inserts.
    pub fn fx_insert_table(&self) -> Result<ReportTable, SceneError> {
        let (title, first) = if self.profile.compact_layout {
            ("FX", 1)
        } else {
            ("FX-2", FX_RETURN_CHANNELS / 2 + 1)
        };
        let mut table = ReportTable::new(title, &["ch", "device", "type", "src"]);
        for id in first..first + FX_INSERT_SLOTS {
            let device = self.scene.value_at(&format!("fx/{}", id), 0)?;
            table.push_row(vec![
                Cell::text(format!("FX{}", id)),
                device.into(),
                self.fx_type(device).into(),
                "INS".into(),
            ]);
        }
        Ok(table)
    }

    /// Path key for a numbered section; compact consoles do not zero-pad.
    fn key(&self, id: u32) -> String {
        if self.profile.compact_layout {
            id.to_string()
        } else {
            pad_id(id)
        }
    }

    fn section_len(&self, section: &str) -> Result<u32, SceneError> {
        Ok(self.scene.node(section)?.len() as u32)
    }

    /// Link flags are stored per channel pair under `/config/<table>`.
    fn link(&self, table: &str, id: u32) -> Result<bool, SceneError> {
        let path = format!("config/{}", table);
        Ok(is_on(self.scene.value_at(&path, ((id - 1) / 2) as usize)?))
    }

    fn flag(&self, path: &str, index: usize) -> Result<bool, SceneError> {
        Ok(is_on(self.scene.value_at(path, index)?))
    }

    fn name_cell(&self, base: &str) -> Result<Cell, SceneError> {
        let path = format!("{}/config", base);
        let name = self.scene.value_at(&path, 0)?;
        let color = self.scene.value_at(&path, 2).ok().map(String::from);
        Ok(Cell::colored(name, color))
    }

    /// Insert slot name when the insert is switched on, empty otherwise.
    fn insert(&self, base: &str) -> Result<String, SceneError> {
        let path = format!("{}/insert", base);
        let state = self.scene.value_at(&path, 0)?;
        if !is_on(state) {
            return Ok(String::new());
        }
        // compact consoles store [state, slot], full-size [state, position, slot]
        let slot_index = if self.profile.compact_layout { 1 } else { 2 };
        Ok(self.scene.value_at(&path, slot_index)?.to_string())
    }

    fn physical(&self, base: &str) -> Result<String, SceneError> {
        let path = format!("{}/config", base);
        let source = parse_number(&path, self.scene.value_at(&path, 3)?)?;
        self.resolver.physical_input(source)
    }

    fn fx_type(&self, device: &str) -> String {
        self.profile.fx_name(device).unwrap_or_default().to_string()
    }
}
