//! Failure reporting: one line for the user, raw details only at debug level.

use domain_catalog::CatalogError;
use std::io::Write;
use tracing::debug;

const CONNECTIVITY_HINT: &str =
    "Could not connect to the catalog service. Check the network connection and the catalog URL.";

/// The single line shown to the user for `err`
pub fn describe(err: &CatalogError) -> String {
    match err {
        CatalogError::NotFound { resource } => {
            format!("Not found: {resource} does not exist in the catalog.")
        }
        CatalogError::RemoteService {
            status: Some(code),
            message,
        } => format!("The catalog service returned an error (HTTP {code}): {message}"),
        CatalogError::RemoteService {
            status: None,
            message,
        } => format!("Something went wrong while talking to the catalog: {message}"),
        CatalogError::Connectivity(_) => CONNECTIVITY_HINT.to_string(),
        CatalogError::InvalidInput(message) => {
            format!("The catalog returned data that cannot be priced: {message}")
        }
    }
}

/// Write the user-facing line for `err` to `out` and log the details
pub fn report_failure(err: &CatalogError, out: &mut impl Write) -> std::io::Result<()> {
    log_failure(err);
    writeln!(out, "{}", describe(err))
}

fn log_failure(err: &CatalogError) {
    match err {
        CatalogError::NotFound { resource } => {
            debug!(resource = %resource, "Catalog resource not found");
        }
        CatalogError::RemoteService { status, message } => {
            debug!(status = ?status, message = %message, "Catalog service error");
        }
        CatalogError::Connectivity(details) => {
            debug!(details = %details, "Catalog connectivity error");
        }
        CatalogError::InvalidInput(details) => {
            debug!(details = %details, "Invalid catalog data");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_distinguishes_failure_kinds() {
        let remote = describe(&CatalogError::remote(Some(503), "Service Unavailable"));
        let generic = describe(&CatalogError::remote(None, "malformed response body"));
        let connectivity = describe(&CatalogError::Connectivity("dns error".to_string()));
        let not_found = describe(&CatalogError::NotFound {
            resource: "product 9999".to_string(),
        });

        assert_eq!(
            remote,
            "The catalog service returned an error (HTTP 503): Service Unavailable"
        );
        assert!(generic.contains("malformed response body"));
        assert!(connectivity.starts_with("Could not connect"));
        assert_eq!(
            not_found,
            "Not found: product 9999 does not exist in the catalog."
        );

        let all = [&remote, &generic, &connectivity, &not_found];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_describe_hides_transport_internals() {
        let message = describe(&CatalogError::Connectivity(
            "error sending request for url (http://127.0.0.1:1/products/1): tcp connect error"
                .into(),
        ));
        assert!(!message.contains("tcp connect error"));
        assert!(!message.contains('\n'));
    }

    #[test]
    fn test_report_failure_writes_single_line() {
        let mut out = Vec::new();
        let err = CatalogError::Connectivity(
            "error sending request for url (http://127.0.0.1:9/products/1): \
             connection closed before message completed"
                .into(),
        );
        report_failure(&err, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(text, format!("{}\n", describe(&err)));
        assert!(!text.contains("connection closed"));
        assert!(!text.contains("127.0.0.1"));
    }

    #[test]
    fn test_report_failure_not_found() {
        let mut out = Vec::new();
        let err = CatalogError::NotFound {
            resource: "product 9999".to_string(),
        };
        report_failure(&err, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Not found: product 9999 does not exist in the catalog.\n"
        );
    }

    #[test]
    fn test_describe_invalid_input() {
        let message = describe(&CatalogError::invalid_input("product 2 has invalid price -1"));
        assert!(message.ends_with("product 2 has invalid price -1"));
    }
}
