//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{
    collect_annotation_files, collect_jams_inputs, output_clip_path, wav_path_for,
};
pub use processor::{CleanOptions, CleanReport, TableOptions, clean_directory, table_from_jams};
