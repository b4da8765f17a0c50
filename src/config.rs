// src/config.rs
use std::path::PathBuf;

use cpdir_core::options::{CopyOptions, CopyOptionsBuilder, DirMode, ErrorPolicy};
use log::LevelFilter;

use crate::cli::{Args, CliDirMode, ReportFormat};
use crate::error::AppError;
use crate::logging::level_from_flags;

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub copy: CopyOptions,
    pub report: ReportFormat,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let on_error = if args.keep_going {
            ErrorPolicy::Continue
        } else {
            ErrorPolicy::Abort
        };

        let copy = CopyOptionsBuilder::default()
            .on_error(on_error)
            .dir_mode(DirMode::from(args.dir_mode))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            source: args.source,
            destination: args.destination,
            copy,
            report: args.report,
            log_level: level_from_flags(args.quiet, args.verbose),
        })
    }
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(CliDirMode, DirMode, Source, Fixed);
