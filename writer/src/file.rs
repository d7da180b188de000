//! `DlisFile`: the top-level writer API. Accumulates typed records in
//! memory, then assembles and writes a complete RP66 V1 stream in one
//! atomic pass.
//!
//! One long-lived builder holds everything a write needs (a [`Registry`]
//! for OBNAME identity, one [`EflrSetBuilder`] per registered Set, and
//! the Frames waiting on row data), and `write_to_path` is the single
//! place that turns it all into bytes.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use dlis_core::obname::ObName;
use dlis_core::Attribute;
use dlis_dictionary::{schemas, EflrSchema};
use dlis_encoding::iflr::{ChannelSample, IflrKind};
use dlis_encoding::segmenter::LogicalRecord;

use crate::config::WriterConfig;
use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::set::EflrSetBuilder;
use crate::source_data::SourceData;
use crate::sul::StorageUnitLabel;
use crate::types::channel::ChannelHandle;
use crate::types::frame::FrameHandle;
use crate::types::{
    Axis, Calibration, CalibrationCoefficient, CalibrationMeasurement, Channel, Comment,
    Computation, Equipment, FileHeader, Frame, Group, LongName, Message, NoFormat, Origin,
    Parameter, Path as DlisPath, Process, Splice, Tool, WellReferencePoint, Zone,
};

/// A DLIS file under construction.
///
/// Every `add_*` method registers one item's attributes into the Set its
/// schema belongs to (creating that Set on first use, preserving
/// first-registration order across Set types) and returns the
/// [`ObName`]/handle the caller needs to cross-reference it from later
/// items. `FILE-HEADER` and `ORIGIN` are tracked separately from the rest,
/// since RP66 V1 fixes their position as the first two Logical Records of
/// every file regardless of call order.
#[derive(Debug)]
pub struct DlisFile {
    config: WriterConfig,
    registry: Registry,
    storage_unit_label: StorageUnitLabel,
    file_header: Option<EflrSetBuilder>,
    origin: Option<EflrSetBuilder>,
    sets: Vec<EflrSetBuilder>,
    set_index: HashMap<&'static str, usize>,
    frames: Vec<FrameHandle>,
}

impl DlisFile {
    /// Start an empty file. No `ORIGIN` is set yet; every other `add_*`
    /// call fails until [`DlisFile::add_origin`] has run once.
    pub fn new(storage_unit_label: StorageUnitLabel, config: WriterConfig) -> Self {
        DlisFile {
            config,
            registry: Registry::new(),
            storage_unit_label,
            file_header: None,
            origin: None,
            sets: Vec::new(),
            set_index: HashMap::new(),
            frames: Vec::new(),
        }
    }

    /// The settings this file was built with.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Register this file's `ORIGIN`. Must be called exactly once, and
    /// before any other `add_*` call: every OBNAME allocated afterwards
    /// carries the `FILE-SET-NUMBER` this call fixes.
    pub fn add_origin(&mut self, origin: Origin) -> Result<ObName> {
        if self.origin.is_some() {
            return Err(dlis_core::Error::invariant_broken(
                "ORIGIN was already added to this file",
            )
            .into());
        }
        let file_set_number = origin.resolve_file_set_number();
        self.registry.set_origin_reference(file_set_number)?;
        let obname = self
            .registry
            .allocate(schemas::origin::SCHEMA.set_type, origin.name.clone())?;
        let attributes = origin.build_attributes(file_set_number)?;
        let mut set = EflrSetBuilder::new(&schemas::origin::SCHEMA, None);
        set.push(obname.clone(), attributes);
        self.origin = Some(set);
        Ok(obname)
    }

    /// Register this file's `FILE-HEADER`. May be called at any point
    /// after [`DlisFile::add_origin`]; its Logical Record is always
    /// emitted first regardless.
    pub fn add_file_header(&mut self, file_header: FileHeader) -> Result<ObName> {
        let obname = self.registry.allocate(
            schemas::file_header::SCHEMA.set_type,
            file_header.name.clone(),
        )?;
        let attributes = file_header.build_attributes()?;
        let mut set = EflrSetBuilder::new(&schemas::file_header::SCHEMA, None);
        set.push(obname.clone(), attributes);
        self.file_header = Some(set);
        Ok(obname)
    }

    /// Allocate an OBNAME for `name` under `schema` and push `attributes`
    /// into that schema's Set, creating the Set on first use.
    fn register(
        &mut self,
        schema: &'static EflrSchema,
        name: &str,
        attributes: Vec<Attribute>,
    ) -> Result<ObName> {
        let obname = self.registry.allocate(schema.set_type, name.to_string())?;
        let index = match self.set_index.get(schema.set_type) {
            Some(&index) => index,
            None => {
                self.sets.push(EflrSetBuilder::new(schema, None));
                let index = self.sets.len() - 1;
                self.set_index.insert(schema.set_type, index);
                index
            }
        };
        self.sets[index].push(obname.clone(), attributes);
        Ok(obname)
    }

    pub fn add_well_reference_point(&mut self, item: WellReferencePoint) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::well_reference_point::SCHEMA, &item.name, attributes)
    }

    pub fn add_axis(&mut self, item: Axis) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::axis::SCHEMA, &item.name, attributes)
    }

    /// Register a `CHANNEL`. Returns a [`ChannelHandle`], the reference a
    /// later [`DlisFile::add_frame`] or a [`SourceData`] lookup needs.
    pub fn add_channel(&mut self, item: Channel) -> Result<ChannelHandle> {
        let attributes = item.build_attributes()?;
        let name = item.name.clone();
        let representation_code = item.representation_code;
        let element_count = item.element_count();
        let obname = self.register(&schemas::channel::SCHEMA, &name, attributes)?;
        Ok(ChannelHandle {
            obname,
            name,
            representation_code,
            element_count,
        })
    }

    /// Register a `FRAME`. Returns a [`FrameHandle`], which
    /// [`DlisFile::write_to_path`] later pulls row data for through a
    /// [`SourceData`].
    pub fn add_frame(&mut self, item: Frame) -> Result<FrameHandle> {
        let attributes = item.build_attributes(self.config.high_compatibility)?;
        let channels = item.channels.clone();
        let obname = self.register(&schemas::frame::SCHEMA, &item.name, attributes)?;
        let handle = FrameHandle { obname, channels };
        self.frames.push(handle.clone());
        Ok(handle)
    }

    pub fn add_path(&mut self, item: DlisPath) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::path::SCHEMA, &item.name, attributes)
    }

    pub fn add_zone(&mut self, item: Zone) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::zone::SCHEMA, &item.name, attributes)
    }

    pub fn add_parameter(&mut self, item: Parameter) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::parameter::SCHEMA, &item.name, attributes)
    }

    pub fn add_equipment(&mut self, item: Equipment) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::equipment::SCHEMA, &item.name, attributes)
    }

    pub fn add_tool(&mut self, item: Tool) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::tool::SCHEMA, &item.name, attributes)
    }

    pub fn add_computation(&mut self, item: Computation) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::computation::SCHEMA, &item.name, attributes)
    }

    pub fn add_process(&mut self, item: Process) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::process::SCHEMA, &item.name, attributes)
    }

    pub fn add_splice(&mut self, item: Splice) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::splice::SCHEMA, &item.name, attributes)
    }

    pub fn add_calibration_measurement(&mut self, item: CalibrationMeasurement) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(
            &schemas::calibration_measurement::SCHEMA,
            &item.name,
            attributes,
        )
    }

    pub fn add_calibration_coefficient(&mut self, item: CalibrationCoefficient) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(
            &schemas::calibration_coefficient::SCHEMA,
            &item.name,
            attributes,
        )
    }

    pub fn add_calibration(&mut self, item: Calibration) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::calibration::SCHEMA, &item.name, attributes)
    }

    pub fn add_group(&mut self, item: Group) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::group::SCHEMA, &item.name, attributes)
    }

    pub fn add_long_name(&mut self, item: LongName) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::long_name::SCHEMA, &item.name, attributes)
    }

    pub fn add_message(&mut self, item: Message) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::message::SCHEMA, &item.name, attributes)
    }

    pub fn add_comment(&mut self, item: Comment) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::comment::SCHEMA, &item.name, attributes)
    }

    pub fn add_no_format(&mut self, item: NoFormat) -> Result<ObName> {
        let attributes = item.build_attributes()?;
        self.register(&schemas::no_format::SCHEMA, &item.name, attributes)
    }

    /// Assemble every registered EFLR Set and Frame's data into the
    /// Visible Record stream that follows the Storage Unit Label, pulling
    /// row data from `source` in [`WriterConfig::row_chunk_size`] chunks.
    fn encode(&self, source: &dyn SourceData) -> Result<Vec<u8>> {
        let mut bodies: Vec<(bool, u8, Vec<u8>)> = Vec::new();

        if let Some(file_header) = &self.file_header {
            push_eflr_body(&mut bodies, file_header)?;
        }
        if let Some(origin) = &self.origin {
            push_eflr_body(&mut bodies, origin)?;
        }
        for set in &self.sets {
            push_eflr_body(&mut bodies, set)?;
        }

        for frame in &self.frames {
            self.encode_frame_data(frame, source, &mut bodies)?;
        }

        let records: Vec<LogicalRecord<'_>> = bodies
            .iter()
            .map(|(is_eflr, logical_record_type, body)| LogicalRecord {
                is_eflr: *is_eflr,
                logical_record_type: *logical_record_type,
                body: body.as_slice(),
            })
            .collect();

        let mut out = Vec::with_capacity(80 + records.iter().map(|r| r.body.len()).sum::<usize>());
        out.extend_from_slice(&self.storage_unit_label.encode()?);
        out.extend(dlis_encoding::segment_records(
            &records,
            self.config.max_visible_record_len,
        )?);
        Ok(out)
    }

    /// Pull `frame`'s channels from `source` in row-chunks and append one
    /// `FDATA` body per row, with a frame number starting at `1` and
    /// increasing monotonically across the whole Frame.
    fn encode_frame_data(
        &self,
        frame: &FrameHandle,
        source: &dyn SourceData,
        bodies: &mut Vec<(bool, u8, Vec<u8>)>,
    ) -> Result<()> {
        let n_rows = source.n_rows();
        let mut frame_number: u32 = 1;
        let mut row = 0usize;
        while row < n_rows {
            let stop = (row + self.config.row_chunk_size).min(n_rows);
            let chunks: Vec<Vec<dlis_core::value::PrimitiveValue>> = frame
                .channels
                .iter()
                .map(|channel| {
                    let key = source.dataset_key(&channel.name).unwrap_or(&channel.name);
                    source.load_chunk(key, row, stop)
                })
                .collect::<Result<_>>()?;

            for local_row in 0..(stop - row) {
                let samples: Vec<ChannelSample<'_>> = frame
                    .channels
                    .iter()
                    .zip(&chunks)
                    .map(|(channel, column)| ChannelSample {
                        representation_code: channel.representation_code,
                        values: &column[local_row],
                    })
                    .collect();
                let body = dlis_encoding::encode_frame_data(&frame.obname, frame_number, &samples)?;
                bodies.push((false, IflrKind::FrameData as u8, body));
                frame_number += 1;
            }
            row = stop;
        }
        Ok(())
    }

    /// Write this file to `path` atomically: the whole stream is built in
    /// memory and written to a temporary file in the destination
    /// directory, then renamed into place, so a failure at any point
    /// leaves no partial file behind.
    pub fn write_to_path(&self, source: &dyn SourceData, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode(source)?;

        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        let parent: &Path = parent.unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(parent)
            .map_err(|source| Error::io(path.to_path_buf(), source))?;
        temp.write_all(&bytes)
            .map_err(|source| Error::io(path.to_path_buf(), source))?;
        temp.flush().map_err(|source| Error::io(path.to_path_buf(), source))?;
        temp.persist(path)
            .map_err(|e| Error::io(path.to_path_buf(), e.error))?;
        Ok(())
    }
}

fn push_eflr_body(bodies: &mut Vec<(bool, u8, Vec<u8>)>, set: &EflrSetBuilder) -> Result<()> {
    let body = set.encode()?;
    if !body.is_empty() {
        bodies.push((true, set.schema().logical_record_type.code(), body));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlis_core::repr_code::ReprCode;
    use dlis_core::value::{DateTime, PrimitiveValue, TimeZoneCode};

    fn new_file() -> DlisFile {
        DlisFile::new(StorageUnitLabel::default(), WriterConfig::default())
    }

    fn creation_time() -> DateTime {
        DateTime::from_ymd_hms_milli(2024, 1, 1, 0, 0, 0, 0, TimeZoneCode::Gmt).unwrap()
    }

    #[test]
    fn add_origin_must_run_before_anything_else() {
        let mut file = new_file();
        let axis = Axis::new("AXIS-1");
        assert!(file.add_axis(axis).is_err());
    }

    #[test]
    fn origin_cannot_be_added_twice() {
        let mut file = new_file();
        file.add_origin(Origin::new("ORIGIN").with_creation_time(creation_time()))
            .unwrap();
        let err = file.add_origin(Origin::new("ORIGIN").with_creation_time(creation_time()));
        assert!(err.is_err());
    }

    #[test]
    fn full_file_with_one_frame_encodes_to_a_sul_followed_by_visible_records() {
        let mut file = new_file();
        file.add_origin(Origin::new("ORIGIN").with_creation_time(creation_time()))
            .unwrap();
        file.add_file_header(FileHeader::new("FILE-HEADER")).unwrap();

        let depth = file
            .add_channel(Channel::new("DEPT", ReprCode::FDoubl))
            .unwrap();
        let gr = file
            .add_channel(Channel::new("GR", ReprCode::FDoubl))
            .unwrap();
        let frame = file
            .add_frame(Frame::new("MAIN", vec![depth.clone(), gr.clone()]).with_row_number_index(3))
            .unwrap();

        let source = crate::source_data::InMemorySourceData::new(3)
            .with_channel(
                "DEPT",
                vec![
                    PrimitiveValue::single_f64(100.0),
                    PrimitiveValue::single_f64(100.5),
                    PrimitiveValue::single_f64(101.0),
                ],
            )
            .unwrap()
            .with_channel(
                "GR",
                vec![
                    PrimitiveValue::single_f64(65.0),
                    PrimitiveValue::single_f64(66.0),
                    PrimitiveValue::single_f64(67.0),
                ],
            )
            .unwrap();

        let bytes = file.encode(&source).unwrap();
        assert_eq!(&bytes[4..9], b"V1.00");
        assert!(bytes.len() > 80);
        assert_eq!(frame.channels.len(), 2);
    }

    #[test]
    fn write_to_path_produces_a_file_with_no_partial_state_on_success() {
        let mut file = new_file();
        file.add_origin(Origin::new("ORIGIN").with_creation_time(creation_time()))
            .unwrap();
        file.add_file_header(FileHeader::new("FILE-HEADER")).unwrap();
        let source = crate::source_data::InMemorySourceData::new(0);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("well.dlis");
        file.write_to_path(&source, &path).unwrap();
        assert!(path.exists());
    }
}
