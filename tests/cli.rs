//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use std::fs;

    use assert_cmd::Command;

    const PAGE: &str = r#"<html><body><img src="/img/a.jpg" width="480"></body></html>"#;
    const MAP: &str = r#"{
        "img/a.jpg": [
            {"url": "/img/a-480.jpg", "width": 480},
            {"url": "/img/a-800.jpg", "width": 800}
        ]
    }"#;

    #[test]
    fn rewrites_a_file_with_a_source_map() {
        let dir = tempfile::tempdir().unwrap();
        let page_path = dir.path().join("page.html");
        let map_path = dir.path().join("renditions.json");
        fs::write(&page_path, PAGE).unwrap();
        fs::write(&map_path, MAP).unwrap();

        let output = Command::cargo_bin("respimg")
            .unwrap()
            .arg(page_path.to_str().unwrap())
            .arg("--source-map")
            .arg(map_path.to_str().unwrap())
            .output()
            .unwrap();

        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(r#"srcset="/img/a-480.jpg 480w, /img/a-800.jpg 800w""#));
        assert!(stdout.contains(r#"sizes="(max-width: 480px) 100vw, 480px""#));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Rewrote 1 of 1 images"));
    }

    #[test]
    fn reads_standard_input_and_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let map_path = dir.path().join("renditions.json");
        let out_path = dir.path().join("out.html");
        fs::write(&map_path, MAP).unwrap();

        let output = Command::cargo_bin("respimg")
            .unwrap()
            .arg("-")
            .arg("--source-map")
            .arg(map_path.to_str().unwrap())
            .arg("--output")
            .arg(out_path.to_str().unwrap())
            .arg("--quiet")
            .write_stdin(PAGE)
            .output()
            .unwrap();

        assert!(output.status.success());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Rewrote"));

        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.contains("srcset="));
    }

    #[test]
    fn list_prints_resolved_sources() {
        let dir = tempfile::tempdir().unwrap();
        let page_path = dir.path().join("page.html");
        fs::write(
            &page_path,
            r#"<html><body><img src="/img/a.jpg"><img src="b.jpg/"></body></html>"#,
        )
        .unwrap();

        let output = Command::cargo_bin("respimg")
            .unwrap()
            .arg(page_path.to_str().unwrap())
            .arg("--list")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout), "img/a.jpg\nb.jpg\n");
    }

    #[test]
    fn class_and_target_attribute_flags_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let page_path = dir.path().join("page.html");
        let map_path = dir.path().join("renditions.json");
        fs::write(&page_path, PAGE).unwrap();
        fs::write(&map_path, MAP).unwrap();

        let output = Command::cargo_bin("respimg")
            .unwrap()
            .arg(page_path.to_str().unwrap())
            .arg("--source-map")
            .arg(map_path.to_str().unwrap())
            .arg("--target-attribute")
            .arg("data-srcset")
            .arg("--add-class")
            .arg("lazy")
            .output()
            .unwrap();

        assert!(output.status.success());

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(r#"data-srcset="/img/a-480.jpg 480w"#));
        assert!(stdout.contains("lazy"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use std::fs;

    use assert_cmd::Command;

    #[test]
    fn missing_source_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let page_path = dir.path().join("page.html");
        fs::write(&page_path, "<html></html>").unwrap();

        let output = Command::cargo_bin("respimg")
            .unwrap()
            .arg(page_path.to_str().unwrap())
            .output()
            .unwrap();

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("source map"));
    }

    #[test]
    fn unreadable_target_is_an_error() {
        let output = Command::cargo_bin("respimg")
            .unwrap()
            .arg("/nonexistent/page.html")
            .arg("--list")
            .output()
            .unwrap();

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read"));
    }

    #[test]
    fn invalid_source_map_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let page_path = dir.path().join("page.html");
        let map_path = dir.path().join("renditions.json");
        fs::write(&page_path, "<html></html>").unwrap();
        fs::write(&map_path, "not json").unwrap();

        let output = Command::cargo_bin("respimg")
            .unwrap()
            .arg(page_path.to_str().unwrap())
            .arg("--source-map")
            .arg(map_path.to_str().unwrap())
            .output()
            .unwrap();

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid source map"));
    }
}
