use super::RequestDescriptor;

#[cfg(windows)]
pub const PLATFORM_LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const PLATFORM_LINE_ENDING: &str = "\n";

/// Renders the INF request document the signing utility consumes.
///
/// Values are substituted verbatim; the INF format has no escaping, so an
/// embedded double quote corrupts the document.
pub fn render(request: &RequestDescriptor, line_ending: &str) -> String {
    let mut lines: Vec<String> = vec![
        "[Version]".into(),
        "Signature=\"$Windows NT$\"".into(),
        String::new(),
        "[NewRequest]".into(),
        format!("Subject = \"CN={}\"", request.common_name()),
        "KeySpec = 1".into(),
        format!("KeyLength = {}", request.key_length().bits()),
        format!(
            "Exportable = {}",
            if request.exportable() { "TRUE" } else { "FALSE" }
        ),
        "MachineKeySet = TRUE".into(),
        format!("ProviderName = \"{}\"", request.provider().display_name()),
        "RequestType = PKCS10".into(),
        "KeyUsage = 0xa0".into(),
        String::new(),
        "[EnhancedKeyUsageExtension]".into(),
        "OID=1.3.6.1.5.5.7.3.1".into(),
        String::new(),
        "[Extensions]".into(),
        "2.5.29.17 = \"{text}\"".into(),
        dns_entry(request.common_name()),
    ];
    lines.extend(request.subject_alt_names().iter().map(|alias| dns_entry(alias)));

    let mut document = lines.join(line_ending);
    document.push_str(line_ending);
    document
}

fn dns_entry(name: &str) -> String {
    format!("_continue_ = \"DNS={name}&\"")
}
