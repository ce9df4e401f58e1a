// Bluster: danger-versus-hype scoring for sensational news text.
//
// This is the library root. The scoring pipeline is pure and synchronous;
// the web server and speech synthesis around it are the I/O shell.

pub mod config;
pub mod dialogue;
pub mod models;
pub mod output;
pub mod scoring;
pub mod tts;
pub mod vocab;

#[cfg(feature = "web")]
pub mod web;
