pub mod config;
pub mod defensive_block;
pub mod dominance;
pub mod entry_zone_stats;
pub mod errors;
pub mod events;
pub mod export;
pub mod final_third;
pub mod match_loader;
pub mod passing_network;
pub mod pitch_zones;
pub mod territory;
pub mod tracking;
pub mod zone_entries;
