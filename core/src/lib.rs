pub mod backup;
pub mod big_tooltip;
pub mod cache;
pub mod collapse;
pub mod collection;
pub mod colors;
pub mod config;
pub mod encoding;
pub mod entry;
pub mod filters;
pub mod formats;
pub mod highlight;
pub mod host;
pub mod job;
pub mod pillars;
pub mod pipeline;
pub mod quality;
pub mod runes;
pub mod tables;


pub use cache::FileCache;
pub use collection::{CustomOverride, EntryCollection};
pub use colors::{ColorCode, ColorSetting, FontColor, Palette};
pub use config::{ConfigError, HostConfig, ModConfig};
pub use entry::{EntryKind, ItemEntry};
pub use host::{parse_version, FsHost, Host, HostError, MINIMUM_HOST_VERSION};
pub use job::{run, RunError, RunSummary};
pub use pipeline::{ComposeSettings, DisplayNameComposer};
