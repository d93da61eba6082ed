pub mod gpg_tool;
