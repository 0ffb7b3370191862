use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn temp_dir(prefix: &str) -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let mut dir = std::env::temp_dir();
    dir.push(format!("inistore_{prefix}_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_file(path: &Path, data: &str) {
    std::fs::write(path, data).unwrap();
}

/// Write `data` to `name` inside a fresh temp dir and return the file path.
pub fn ini_file(prefix: &str, name: &str, data: &str) -> PathBuf {
    let path = temp_dir(prefix).join(name);
    write_file(&path, data);
    path
}

pub const VALID: &str = "\
; top-level keys
key1=value1
key2 = value with spaces

[section1]
host=localhost
port=8080
enabled=true

[section2]
name = test database
user=admin
password=secret123
";

pub const COMMENTS: &str = "\
# Database settings
[database]
host=localhost ; primary host
port=3306 # default MySQL port

; Server settings
[server]
address = 192.168.1.1   ; LAN address
timeout=30#seconds
";

pub const WHITESPACE: &str = "   key1   =   value1   \n\t[  section1  ]\t\nkey2=value2\n\t\tkey3\t=\tvalue3\t\n[section2]\n  key4 = value with    spaces  \n";

pub const MALFORMED: &str = "\
valid_key=valid_value
this line has no equals sign
[section1]
good_key=good_value
another bad line
[unterminated
another_good_key=another_good_value
";
