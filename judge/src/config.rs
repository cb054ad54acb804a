use std::fmt;
use std::str::FromStr;

use kalaha_agents::{Agent, GreedyAgent, HumanAgent, MinimaxAgent, RandomAgent};
use rand::rngs::StdRng;
use rand::Rng;

pub const DEFAULT_MINIMAX_DEPTH: u32 = 5;

/// Which agent plays one side, parsed from the command line.
///
/// Accepted forms: `human`, `random`, `greedy`, `minimax` and
/// `minimax:<depth>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentSpec {
    Human,
    Random,
    Greedy,
    Minimax { depth: u32 },
}

impl FromStr for AgentSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(AgentSpec::Human),
            "random" => Ok(AgentSpec::Random),
            "greedy" => Ok(AgentSpec::Greedy),
            "minimax" => Ok(AgentSpec::Minimax {
                depth: DEFAULT_MINIMAX_DEPTH,
            }),
            _ => match s.strip_prefix("minimax:") {
                Some(depth) => {
                    let depth = depth
                        .parse()
                        .map_err(|_| format!("'{}' is not a valid search depth", depth))?;
                    Ok(AgentSpec::Minimax { depth })
                }
                None => Err(format!(
                    "unknown agent '{}', expected human, random, greedy or minimax[:depth]",
                    s
                )),
            },
        }
    }
}

impl fmt::Display for AgentSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentSpec::Human => write!(f, "human"),
            AgentSpec::Random => write!(f, "random"),
            AgentSpec::Greedy => write!(f, "greedy"),
            AgentSpec::Minimax { depth } => write!(f, "minimax:{}", depth),
        }
    }
}

impl AgentSpec {
    /// Instantiates the agent. Seeds for the seeded agents are drawn from
    /// `rng`, so a single judge seed reproduces the whole match.
    pub fn build(self, alpha_beta: bool, rng: &mut StdRng) -> Box<dyn Agent> {
        match self {
            AgentSpec::Human => Box::new(HumanAgent::new(
                std::io::stdin().lock(),
                std::io::stdout(),
            )),
            AgentSpec::Random => Box::new(RandomAgent::new(rng.gen())),
            AgentSpec::Greedy => Box::new(GreedyAgent),
            AgentSpec::Minimax { depth } => {
                Box::new(MinimaxAgent::new(depth, alpha_beta, rng.gen()))
            }
        }
    }
}
