//! Rendering — chat-facing text blocks and human-readable byte sizes.

use crate::container::ContainerSummary;
use crate::image::ImageSummary;

/// Format a byte count with binary units and one decimal place.
///
/// Divides by 1024 per unit up to EiB/ZiB; anything past ZiB renders
/// in YiB.
pub fn human_size(bytes: i64) -> String {
    let mut size = bytes as f64;
    for unit in ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"] {
        if size.abs() < 1024.0 {
            return format!("{:.1}{}B", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.1}YiB", size)
}

/// Render the container listing for `/ps`.
pub fn render_containers(containers: &[ContainerSummary]) -> String {
    let mut out = String::from("*Containers:*\n\n");
    for container in containers {
        out.push_str(&format!("Name: {}\n", container.names.join(", ")));
        out.push_str(&format!("Image: {}\n", container.image));
        out.push_str(&format!("Command: {}\n", container.command));

        let mounts: Vec<String> = container
            .mounts
            .iter()
            .map(|(source, destination)| format!("{}:{}", source, destination))
            .collect();
        out.push_str(&format!("Mounts: {}\n", mounts.join(", ")));

        let ports: Vec<String> = container
            .ports
            .iter()
            .map(|(private, public)| match public {
                Some(public) => format!("{}->{}", private, public),
                None => private.to_string(),
            })
            .collect();
        out.push_str(&format!("Ports: {}\n", ports.join(", ")));

        out.push_str(&format!("Status: {}\n\n", container.status));
    }
    out
}

/// Render the image listing for `/images`.
pub fn render_images(images: &[ImageSummary]) -> String {
    let mut out = String::new();
    let mut untagged = 0usize;
    for image in images {
        if image.tags.is_empty() {
            untagged += 1;
            continue;
        }
        out.push_str(&format!(
            "Tags: {},\nSize: {}\n\n",
            image.tags.join(", "),
            human_size(image.size)
        ));
    }
    out.push_str(&format!("There are {} untagged images.", untagged));
    out
}

/// Render the `/version` reply.
pub fn render_version(bot_version: &str, engine_version: &str) -> String {
    format!(
        "Bot version: {}\nDocker version: {}",
        bot_version, engine_version
    )
}
