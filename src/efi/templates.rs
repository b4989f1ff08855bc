//! Static templates for generated EFI artifacts
//!
//! The BIOS instructions and the OpenCore config.plist skeleton are fixed
//! documents; only the tier name, the SMBIOS product name, and the boot-args
//! string vary. Templates live here as constants with `{{token}}` slots so
//! the generator stays free of embedded document literals.

/// BIOS setup guide written next to the generated EFI. `{{tier}}` is the
/// display name of the selected tier.
pub const BIOS_SETTINGS_TEMPLATE: &str = r#"BIOS SETUP INSTRUCTIONS ({{tier}})
==================================================

1.  **Secure Boot**: DISABLE (Critical)
2.  **Intel SGX**: DISABLE
3.  **Fast Boot**: DISABLE
4.  **CSM**: DISABLE (UEFI Only)
5.  **VT-d**: ENABLE (but Disable in config.plist if needed)
6.  **XMP / EXPO**: ENABLE (Profile 1)
7.  **Resize BAR**: ENABLE
8.  **Above 4G Decoding**: ENABLE
9.  **Serial Port**: DISABLE

[ACTION REQUIRED]
Please take a clear PHOTO of these settings on your BIOS screen
with your phone before Saving & Exiting."#;

/// Minimal bootable OpenCore config.plist. `{{boot_args}}` and `{{smbios}}`
/// are the only tier-dependent values; serial fields stay as GENERATE_ME
/// placeholders until the user runs the SMBIOS generator.
pub const CONFIG_PLIST_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>ACPI</key>
    <dict>
        <key>Add</key>
        <array>
            <dict><key>Enabled</key><true/><key>Path</key><string>SSDT-AWAC.aml</string></dict>
            <dict><key>Enabled</key><true/><key>Path</key><string>SSDT-EC-USBX-DESKTOP.aml</string></dict>
            <dict><key>Enabled</key><true/><key>Path</key><string>SSDT-PLUG-ALT.aml</string></dict>
            <dict><key>Enabled</key><true/><key>Path</key><string>SSDT-RHUB.aml</string></dict>
        </array>
    </dict>
    <key>Booter</key>
    <dict><key>Quirks</key><dict><key>AvoidRuntimeDefrag</key><true/><key>DevirtualiseMmio</key><true/><key>EnableSafeModeSlide</key><true/><key>ProvideCustomSlide</key><true/><key>RebuildAppleMemoryMap</key><true/><key>ResizeAppleGpuBars</key><integer>0</integer><key>SetupVirtualMap</key><true/><key>SyncRuntimePermissions</key><true/></dict></dict>
    <key>DeviceProperties</key>
    <dict><key>Add</key><dict></dict></dict>
    <key>Kernel</key>
    <dict>
        <key>Add</key>
        <array>
            <dict><key>BundlePath</key><string>Lilu.kext</string><key>Enabled</key><true/><key>ExecutablePath</key><string>Contents/MacOS/Lilu</string><key>PlistPath</key><string>Contents/Info.plist</string></dict>
            <dict><key>BundlePath</key><string>VirtualSMC.kext</string><key>Enabled</key><true/><key>ExecutablePath</key><string>Contents/MacOS/VirtualSMC</string><key>PlistPath</key><string>Contents/Info.plist</string></dict>
            <dict><key>BundlePath</key><string>WhateverGreen.kext</string><key>Enabled</key><true/><key>ExecutablePath</key><string>Contents/MacOS/WhateverGreen</string><key>PlistPath</key><string>Contents/Info.plist</string></dict>
            <dict><key>BundlePath</key><string>AppleALC.kext</string><key>Enabled</key><true/><key>ExecutablePath</key><string>Contents/MacOS/AppleALC</string><key>PlistPath</key><string>Contents/Info.plist</string></dict>
        </array>
        <key>Quirks</key>
        <dict><key>AppleXcpmCfgLock</key><true/><key>DisableIoMapper</key><true/><key>PanicNoKextDump</key><true/><key>PowerTimeoutKernelPanic</key><true/><key>XhciPortLimit</key><false/></dict>
    </dict>
    <key>NVRAM</key>
    <dict>
        <key>Add</key>
        <dict>
            <key>7C436110-AB2A-4BBB-A880-FE41995C9F82</key>
            <dict>
                <key>boot-args</key>
                <string>{{boot_args}}</string>
                <key>csr-active-config</key>
                <data>AAAAAA==</data>
                <key>prev-lang:kbd</key>
                <string>en-US:0</string>
            </dict>
        </dict>
    </dict>
    <key>PlatformInfo</key>
    <dict>
        <key>Generic</key>
        <dict>
            <key>SystemProductName</key>
            <string>{{smbios}}</string>
            <key>SystemSerialNumber</key>
            <string>GENERATE_ME</string>
            <key>SystemUUID</key>
            <string>GENERATE_ME</string>
            <key>MLB</key>
            <string>GENERATE_ME</string>
        </dict>
        <key>UpdateSMBIOS</key>
        <true/>
    </dict>
    <key>UEFI</key>
    <dict>
        <key>APFS</key>
        <dict><key>EnableJumpstart</key><true/><key>GlobalConnect</key><false/><key>HideVerbose</key><true/><key>JumpstartHotPlug</key><false/><key>MinDate</key><integer>0</integer><key>MinVersion</key><integer>0</integer></dict>
        <key>Drivers</key>
        <array>
            <dict><key>Arguments</key><string></string><key>Comment</key><string></string><key>Enabled</key><true/><key>Path</key><string>OpenRuntime.efi</string></dict>
            <dict><key>Arguments</key><string></string><key>Comment</key><string></string><key>Enabled</key><true/><key>Path</key><string>HfsPlus.efi</string></dict>
        </array>
        <key>Quirks</key>
        <dict><key>ReleaseUsbOwnership</key><true/><key>RequestBootVarRouting</key><true/></dict>
    </dict>
</dict>
</plist>"#;

/// Render the BIOS instructions for a tier
pub fn render_bios_settings(tier_name: &str) -> String {
    BIOS_SETTINGS_TEMPLATE.replace("{{tier}}", tier_name)
}

/// Render the boot configuration document
pub fn render_config_plist(smbios: &str, boot_args: &str) -> String {
    CONFIG_PLIST_TEMPLATE
        .replace("{{smbios}}", smbios)
        .replace("{{boot_args}}", boot_args)
}
