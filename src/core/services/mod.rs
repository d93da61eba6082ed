pub mod key_exporter;
