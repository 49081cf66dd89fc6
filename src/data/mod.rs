pub mod series_file;
