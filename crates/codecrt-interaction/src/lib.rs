//! Command interpretation and remote gateways for CodeCRT.
//!
//! # Module Structure
//!
//! - `interpreter`: the command state machine (`CommandInterpreter`)
//! - `terminal`: echo + output-log driver around the interpreter
//! - `prompts`: era-aware prompt builder
//! - `challenge_generator`: challenge rolls, reply parsing, verdicts
//! - `clock`: one-second challenge countdown
//! - `evolution`, `fossil_analyzer`: front-end features built on the completion gateway
//! - `openrouter_api_agent`, `piston_api_agent`: HTTP gateway clients

pub mod challenge_generator;
pub mod clock;
pub mod evolution;
pub mod fossil_analyzer;
pub mod interpreter;
pub mod openrouter_api_agent;
pub mod piston_api_agent;
pub mod prompts;
pub mod terminal;

pub use clock::ChallengeClock;
pub use evolution::{EvolutionRunner, EvolutionStep};
pub use fossil_analyzer::FossilAnalyzer;
pub use interpreter::{CommandInterpreter, CommandOutcome, SharedSession, Signal};
pub use openrouter_api_agent::OpenRouterApiAgent;
pub use piston_api_agent::PistonApiAgent;
pub use terminal::Terminal;
