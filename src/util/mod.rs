mod dump_to_file;

pub use self::dump_to_file::DumpToFile;
