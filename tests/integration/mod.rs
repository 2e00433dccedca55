mod cli_commands;
mod config_loading;
