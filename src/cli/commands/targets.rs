use crate::config::SyncConfig;

/// Job names grouped by kind, in the order they are listed.
pub fn targets(config: &SyncConfig) -> Vec<(&'static str, Vec<String>)> {
    let per_language = |job: &str| {
        let mut names = vec![job.to_string()];
        names.extend(
            config
                .inputs()
                .iter()
                .map(|l| format!("{} {}", job, l.code)),
        );
        names.push(format!("{}-all", job));
        names
    };

    vec![
        ("upload", per_language("upload")),
        ("download", per_language("download")),
        ("generate", vec!["generate".to_string()]),
    ]
}
