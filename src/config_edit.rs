//! OpenCore config.plist editing
//!
//! Owns every mutation of a mounted boot configuration: boot-args, kernel
//! quirks, and kext entries. The document is parsed and rewritten with the
//! `plist` crate; a `.bak` copy of the file is taken before any mutation.
//! Single writer assumed, concurrent edits are unsupported.

use crate::error::{HackinTuneError, Result};
use plist::{Dictionary, Value};
use std::path::{Path, PathBuf};

/// NVRAM GUID holding boot-args and csr-active-config
pub const NVRAM_BOOT_GUID: &str = "7C436110-AB2A-4BBB-A880-FE41995C9F82";

fn load(path: &Path) -> Result<Value> {
    Value::from_file(path).map_err(|e| {
        HackinTuneError::parse(format!("cannot read {}: {}", path.display(), e))
    })
}

fn save(path: &Path, value: &Value) -> Result<()> {
    value.to_file_xml(path).map_err(|e| {
        HackinTuneError::efi(format!("cannot write {}: {}", path.display(), e))
    })
}

/// Copy the document to `<path>.bak` before mutating it.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

fn backup(path: &Path) -> Result<()> {
    let bak = backup_path(path);
    std::fs::copy(path, &bak).map_err(|e| {
        HackinTuneError::efi(format!("cannot back up to {}: {}", bak.display(), e))
    })?;
    log::debug!("Backed up {} to {}", path.display(), bak.display());
    Ok(())
}

fn nvram_boot_dict_mut<'a>(root: &'a mut Dictionary) -> Result<&'a mut Dictionary> {
    root.get_mut("NVRAM")
        .and_then(Value::as_dictionary_mut)
        .and_then(|nvram| nvram.get_mut("Add"))
        .and_then(Value::as_dictionary_mut)
        .and_then(|add| add.get_mut(NVRAM_BOOT_GUID))
        .and_then(Value::as_dictionary_mut)
        .ok_or_else(|| HackinTuneError::parse("NVRAM:Add boot GUID dictionary missing"))
}

fn kernel_quirks_mut<'a>(root: &'a mut Dictionary) -> Result<&'a mut Dictionary> {
    root.get_mut("Kernel")
        .and_then(Value::as_dictionary_mut)
        .and_then(|kernel| kernel.get_mut("Quirks"))
        .and_then(Value::as_dictionary_mut)
        .ok_or_else(|| HackinTuneError::parse("Kernel:Quirks dictionary missing"))
}

fn as_root_mut<'a>(value: &'a mut Value, path: &Path) -> Result<&'a mut Dictionary> {
    value.as_dictionary_mut().ok_or_else(|| {
        HackinTuneError::parse(format!("{} is not a plist dictionary", path.display()))
    })
}

/// Read the boot-args string.
pub fn read_boot_args(path: &Path) -> Result<String> {
    let mut value = load(path)?;
    let root = as_root_mut(&mut value, path)?;
    let args = nvram_boot_dict_mut(root)?
        .get("boot-args")
        .and_then(Value::as_string)
        .ok_or_else(|| HackinTuneError::parse("boot-args missing from NVRAM:Add"))?;
    Ok(args.to_string())
}

/// Replace the boot-args string.
pub fn write_boot_args(path: &Path, args: &str) -> Result<()> {
    backup(path)?;
    let mut value = load(path)?;
    let root = as_root_mut(&mut value, path)?;
    nvram_boot_dict_mut(root)?.insert("boot-args".to_string(), Value::String(args.to_string()));
    save(path, &value)?;
    log::info!("boot-args set to '{}'", args);
    Ok(())
}

/// Append a boot-arg unless an argument with the same key is already present.
/// Returns the resulting boot-args string and whether anything changed.
/// Keys are matched up to `=` so `alcid=1` will not stack on `alcid=7`.
pub fn ensure_boot_arg(path: &Path, arg: &str) -> Result<(String, bool)> {
    let current = read_boot_args(path)?;
    let key = arg.split('=').next().unwrap_or(arg);
    let already_set = current
        .split_whitespace()
        .any(|token| token == arg || (arg.contains('=') && token.starts_with(key) && token[key.len()..].starts_with('=')));
    if already_set {
        return Ok((current, false));
    }
    let updated = if current.is_empty() {
        arg.to_string()
    } else {
        format!("{} {}", current, arg)
    };
    write_boot_args(path, &updated)?;
    Ok((updated, true))
}

/// Read a Kernel quirk boolean.
pub fn read_quirk_bool(path: &Path, quirk: &str) -> Result<bool> {
    let mut value = load(path)?;
    let root = as_root_mut(&mut value, path)?;
    kernel_quirks_mut(root)?
        .get(quirk)
        .and_then(Value::as_boolean)
        .ok_or_else(|| HackinTuneError::parse(format!("Kernel:Quirks:{} missing", quirk)))
}

/// Set a Kernel quirk boolean.
pub fn set_quirk_bool(path: &Path, quirk: &str, enabled: bool) -> Result<()> {
    backup(path)?;
    let mut value = load(path)?;
    let root = as_root_mut(&mut value, path)?;
    kernel_quirks_mut(root)?.insert(quirk.to_string(), Value::Boolean(enabled));
    save(path, &value)?;
    log::info!("Kernel:Quirks:{} set to {}", quirk, enabled);
    Ok(())
}

/// Set a Kernel quirk integer (SetApfsTrimTimeout and friends).
pub fn set_quirk_int(path: &Path, quirk: &str, n: i64) -> Result<()> {
    backup(path)?;
    let mut value = load(path)?;
    let root = as_root_mut(&mut value, path)?;
    kernel_quirks_mut(root)?.insert(quirk.to_string(), Value::Integer(n.into()));
    save(path, &value)?;
    log::info!("Kernel:Quirks:{} set to {}", quirk, n);
    Ok(())
}

/// Prepend a kext entry to Kernel:Add so it loads before existing kexts.
/// `kext_file` is the bundle name, e.g. `"AirportItlwm.kext"`.
pub fn add_kext_entry(path: &Path, kext_file: &str) -> Result<()> {
    backup(path)?;
    let mut value = load(path)?;
    let root = as_root_mut(&mut value, path)?;
    let kernel_add = root
        .get_mut("Kernel")
        .and_then(Value::as_dictionary_mut)
        .and_then(|kernel| kernel.get_mut("Add"))
        .and_then(Value::as_array_mut)
        .ok_or_else(|| HackinTuneError::parse("Kernel:Add array missing"))?;

    let executable = kext_file.strip_suffix(".kext").unwrap_or(kext_file);
    let mut entry = Dictionary::new();
    entry.insert("BundlePath".to_string(), Value::String(kext_file.to_string()));
    entry.insert("Enabled".to_string(), Value::Boolean(true));
    entry.insert(
        "ExecutablePath".to_string(),
        Value::String(format!("Contents/MacOS/{}", executable)),
    );
    entry.insert(
        "PlistPath".to_string(),
        Value::String("Contents/Info.plist".to_string()),
    );
    kernel_add.insert(0, Value::Dictionary(entry));

    save(path, &value)?;
    log::info!("Injected {} into Kernel:Add", kext_file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::efi::templates::render_config_plist;
    use crate::efi::BOOT_ARGS;
    use std::fs;

    fn write_generated_config(dir: &Path) -> PathBuf {
        let path = dir.join("config.plist");
        fs::write(&path, render_config_plist("iMac20,1", BOOT_ARGS)).unwrap();
        path
    }

    #[test]
    fn test_boot_args_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_generated_config(dir.path());

        assert_eq!(read_boot_args(&path).unwrap(), BOOT_ARGS);
        write_boot_args(&path, "-v alcid=7").unwrap();
        assert_eq!(read_boot_args(&path).unwrap(), "-v alcid=7");
    }

    #[test]
    fn test_backup_holds_pre_edit_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_generated_config(dir.path());
        let before = fs::read(&path).unwrap();

        write_boot_args(&path, "-v").unwrap();

        let bak = backup_path(&path);
        assert!(bak.exists());
        assert_eq!(fs::read(&bak).unwrap(), before);
    }

    #[test]
    fn test_ensure_boot_arg_skips_existing_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_generated_config(dir.path());

        // Template already carries alcid=1
        let (args, changed) = ensure_boot_arg(&path, "alcid=1").unwrap();
        assert!(!changed);
        assert_eq!(args, BOOT_ARGS);

        // Same key, different value: still skipped
        write_boot_args(&path, "-v alcid=7").unwrap();
        let (_, changed) = ensure_boot_arg(&path, "alcid=1").unwrap();
        assert!(!changed);

        // New key appends
        let (args, changed) = ensure_boot_arg(&path, "npci=0x2000").unwrap();
        assert!(changed);
        assert_eq!(args, "-v alcid=7 npci=0x2000");
    }

    #[test]
    fn test_quirk_toggle() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_generated_config(dir.path());

        // Template does not carry ThirdPartyDrives; setting creates it
        set_quirk_bool(&path, "ThirdPartyDrives", true).unwrap();
        assert!(read_quirk_bool(&path, "ThirdPartyDrives").unwrap());
        set_quirk_bool(&path, "ThirdPartyDrives", false).unwrap();
        assert!(!read_quirk_bool(&path, "ThirdPartyDrives").unwrap());

        set_quirk_int(&path, "SetApfsTrimTimeout", 0).unwrap();
        let value = Value::from_file(&path).unwrap();
        let timeout = value
            .as_dictionary()
            .and_then(|r| r.get("Kernel"))
            .and_then(Value::as_dictionary)
            .and_then(|k| k.get("Quirks"))
            .and_then(Value::as_dictionary)
            .and_then(|q| q.get("SetApfsTrimTimeout"))
            .and_then(Value::as_signed_integer)
            .unwrap();
        assert_eq!(timeout, 0);
    }

    #[test]
    fn test_add_kext_entry_prepends() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_generated_config(dir.path());

        add_kext_entry(&path, "AirportItlwm.kext").unwrap();

        let value = Value::from_file(&path).unwrap();
        let add = value
            .as_dictionary()
            .and_then(|r| r.get("Kernel"))
            .and_then(Value::as_dictionary)
            .and_then(|k| k.get("Add"))
            .and_then(Value::as_array)
            .unwrap();
        // Template ships four kexts, injection lands in front
        assert_eq!(add.len(), 5);
        let first = add[0].as_dictionary().unwrap();
        assert_eq!(
            first.get("BundlePath").and_then(Value::as_string),
            Some("AirportItlwm.kext")
        );
        assert_eq!(
            first.get("ExecutablePath").and_then(Value::as_string),
            Some("Contents/MacOS/AirportItlwm")
        );
    }
}
