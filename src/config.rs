use clap::Parser;
use std::net::SocketAddr;

use crate::data::Team;
use crate::views::ComparisonState;

/// NFL win prediction dashboard server
#[derive(Parser, Debug, Clone)]
#[command(name = "gridiron-dashboard", version, about)]
pub struct Config {
    /// Dashboard listen address
    #[arg(long, env = "DASHBOARD_ADDR", default_value = "0.0.0.0:8080")]
    pub dashboard_addr: String,

    /// Team preselected in the first comparison slot
    #[arg(long, env = "DEFAULT_TEAM1", default_value = "Kansas City Chiefs")]
    pub default_team1: Team,

    /// Team preselected in the second comparison slot
    #[arg(long, env = "DEFAULT_TEAM2", default_value = "Buffalo Bills")]
    pub default_team2: Team,

    /// Allow cross-origin requests to the JSON API
    #[arg(
        long,
        env = "PERMISSIVE_CORS",
        default_value = "true",
        action = clap::ArgAction::Set
    )]
    pub permissive_cors: bool,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.dashboard_addr.parse::<SocketAddr>().is_err() {
            anyhow::bail!(
                "dashboard_addr must be a socket address like 0.0.0.0:8080, got {:?}",
                self.dashboard_addr
            );
        }
        Ok(())
    }

    pub fn default_pair(&self) -> ComparisonState {
        ComparisonState::new(self.default_team1, self.default_team2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_and_validate() {
        let config = Config::try_parse_from(["gridiron-dashboard"]).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_pair(), ComparisonState::default());
        assert!(config.permissive_cors);
    }

    #[test]
    fn teams_are_parsed_from_full_names() {
        let config = Config::try_parse_from([
            "gridiron-dashboard",
            "--default-team1",
            "Dallas Cowboys",
            "--default-team2",
            "Dallas Cowboys",
            "--permissive-cors",
            "false",
        ])
        .unwrap();
        assert_eq!(config.default_team1, Team::DallasCowboys);
        assert_eq!(config.default_team2, Team::DallasCowboys);
        assert!(!config.permissive_cors);
    }

    #[test]
    fn unknown_team_is_a_parse_error() {
        let result =
            Config::try_parse_from(["gridiron-dashboard", "--default-team1", "Cowboys"]);
        assert!(result.is_err());
    }

    #[test]
    fn bad_listen_address_fails_validation() {
        let config =
            Config::try_parse_from(["gridiron-dashboard", "--dashboard-addr", "localhost"])
                .unwrap();
        assert!(config.validate().is_err());
    }
}
