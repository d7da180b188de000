//! One module per RP66 V1 EFLR record type this writer can produce.
//!
//! Each type holds plain, directly settable fields (mirroring how the
//! original Python writer models these as dataclasses) and a private
//! `build_attributes` that walks an [`crate::builder::EflrObjectBuilder`]
//! to turn them into the attribute list [`crate::file::DlisFile`]
//! registers. Validation specific to one record type (Channel's
//! dimension/element-limit defaulting, Frame's index statistics, Zone's
//! domain-dependent representation code, ...) lives here, next to the
//! fields it validates; everything else is a direct field-to-attribute
//! mapping with no extra logic.

pub mod axis;
pub mod calibration;
pub mod calibration_coefficient;
pub mod calibration_measurement;
pub mod channel;
pub mod comment;
pub mod computation;
pub mod equipment;
pub mod file_header;
pub mod frame;
pub mod group;
pub mod long_name;
pub mod message;
pub mod no_format;
pub mod origin;
pub mod parameter;
pub mod path;
pub mod process;
pub mod splice;
pub mod tool;
pub mod well_reference_point;
pub mod zone;

pub use axis::Axis;
pub use calibration::Calibration;
pub use calibration_coefficient::CalibrationCoefficient;
pub use calibration_measurement::CalibrationMeasurement;
pub use channel::Channel;
pub use comment::Comment;
pub use computation::Computation;
pub use equipment::Equipment;
pub use file_header::FileHeader;
pub use frame::Frame;
pub use group::Group;
pub use long_name::LongName;
pub use message::Message;
pub use no_format::NoFormat;
pub use origin::Origin;
pub use parameter::Parameter;
pub use path::Path;
pub use process::Process;
pub use splice::Splice;
pub use tool::Tool;
pub use well_reference_point::WellReferencePoint;
pub use zone::Zone;
