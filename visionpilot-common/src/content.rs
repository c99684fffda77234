//! Static page content.

use serde::Serialize;

use crate::chart::ChartDatum;
use crate::route::Page;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Lane Detection",
        description: "Hybrid approach using Spatial CNN (SCNN) and CV for robust highway lane keeping.",
    },
    Feature {
        title: "Object Detection",
        description: "YOLOv8 & CNN powered detection for vehicles, pedestrians, and signals.",
    },
    Feature {
        title: "Sensor Fusion",
        description: "Integration of Camera, LiDAR, and Radar for comprehensive environment mapping.",
    },
    Feature {
        title: "Autonomous Control",
        description: "Real-time PID controllers managing steering and ACC with soft-body physics.",
    },
    Feature {
        title: "Live Telemetry",
        description: "Real-time visualization and monitoring via Foxglove Studio WebSocket.",
    },
    Feature {
        title: "BeamNG Integration",
        description: "High-fidelity physics simulation testing ground for autonomous algorithms.",
    },
];

/// A call to action linking to another page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cta {
    pub label: &'static str,
    pub page: Page,
}

pub const ARCHITECTURE_CTA: Cta = Cta {
    label: "Deep Dive into Architecture",
    page: Page::Technical,
};

pub const SIMULATION_CTA: Cta = Cta {
    label: "Watch Simulation Demos",
    page: Page::Demos,
};

/// One layer of the perception stack shown on the landing page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerceptionLayer {
    pub title: &'static str,
    pub tag: &'static str,
    pub description: &'static str,
}

pub const PERCEPTION_LAYERS: [PerceptionLayer; 2] = [
    PerceptionLayer {
        title: "Semantic Segmentation",
        tag: "SEGMENTATION",
        description: "Pixel-level understanding of drivable surfaces and lane markings using Spatial CNN.",
    },
    PerceptionLayer {
        title: "Object Detection",
        tag: "OBJECT_DETECTION",
        description: "Real-time bounding box regression for vehicles, pedestrians, and signals via YOLOv8.",
    },
];

/// Sensor kinds overlapping on the coverage map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FusionSensor {
    pub name: &'static str,
    pub legend: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

pub const FUSION_SENSORS: [FusionSensor; 3] = [
    FusionSensor {
        name: "LiDAR (Light Detection and Ranging)",
        legend: "LiDAR",
        description: "Provides precise 3D geometry and depth, unaffected by shadows or texture.",
        color: "#3b82f6",
    },
    FusionSensor {
        name: "Radar (Radio Detection)",
        legend: "Radar",
        description: "Directly measures object velocity (Doppler effect) and works in heavy rain/fog.",
        color: "#ef4444",
    },
    FusionSensor {
        name: "Camera (Computer Vision)",
        legend: "Camera",
        description: "Essential for semantic understanding: reading signs, lane colors, and brake lights.",
        color: "#10b981",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipelineStage {
    pub id: &'static str,
    pub title: &'static str,
    pub details: &'static [&'static str],
}

pub const PIPELINE: [PipelineStage; 4] = [
    PipelineStage {
        id: "simulation",
        title: "Simulation Layer",
        details: &[
            "BeamNG.tech Physics",
            "Traffic Generation",
            "Sensor Simulation (LiDAR/Cam/Radar)",
        ],
    },
    PipelineStage {
        id: "perception",
        title: "Perception Pipeline",
        details: &[
            "SCNN & Traditional CV (Lanes)",
            "YOLOv8 (Objects)",
            "CNN (Signs)",
        ],
    },
    PipelineStage {
        id: "fusion",
        title: "Sensor Fusion",
        details: &["Kalman Filters", "Object Tracking", "State Estimation"],
    },
    PipelineStage {
        id: "control",
        title: "Control System",
        details: &["PID Controllers", "Path Planning", "Actuator Commands"],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensor {
    pub name: &'static str,
    pub specs: [&'static str; 4],
    pub description: &'static str,
}

pub const SENSORS: [Sensor; 5] = [
    Sensor {
        name: "Main Camera",
        specs: ["1080p Resolution", "60 FPS", "120° FOV", "HDR Enabled"],
        description: "Primary input for lane detection and object classification.",
    },
    Sensor {
        name: "LiDAR Array",
        specs: ["100m+ Range", "360° Horizontal", "32 Channels", "10Hz Update"],
        description: "Velodyne-style simulation for precise depth and obstacle mapping.",
    },
    Sensor {
        name: "Dual GPS",
        specs: ["RTK Precision", "Dual Antenna", "2cm Accuracy", "Multi-Band"],
        description: "Global localization for path planning and map matching.",
    },
    Sensor {
        name: "IMU",
        specs: ["9-Axis", "1kHz Rate", "Accelerometer", "Gyroscope"],
        description: "Inertial measurement for dead reckoning and state estimation.",
    },
    Sensor {
        name: "Tri-Radar System",
        specs: [
            "1 Front / 2 Rear",
            "150m Range",
            "Blind Spot Monitor",
            "Doppler Velocity",
        ],
        description: "Long-range front radar with dual rear corner radars for blind spot monitoring.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DemoMedia {
    /// Streaming video, played through the YouTube embed once activated.
    Video { youtube_id: &'static str },
    /// Animated preview served from the site's static assets.
    Image { asset: &'static str },
}

impl DemoMedia {
    pub fn thumbnail_url(&self) -> Option<String> {
        match self {
            DemoMedia::Video { youtube_id } => Some(format!(
                "https://img.youtube.com/vi/{youtube_id}/maxresdefault.jpg"
            )),
            DemoMedia::Image { .. } => None,
        }
    }

    pub fn embed_url(&self) -> Option<String> {
        match self {
            DemoMedia::Video { youtube_id } => Some(format!(
                "https://www.youtube.com/embed/{youtube_id}?autoplay=1"
            )),
            DemoMedia::Image { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DemoEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub media: DemoMedia,
}

pub const DEMOS: [DemoEntry; 4] = [
    DemoEntry {
        title: "Autonomous Lane Keeping v2",
        description: "Fused CV & SCNN detection with tuned PID steering in BeamNG.tech.",
        tags: &["Fusion", "PID", "ACC", "Lane Detection", "Control"],
        media: DemoMedia::Video {
            youtube_id: "7eA_XfIkLWQ",
        },
    },
    DemoEntry {
        title: "Foxglove LiDAR Visualization",
        description: "Real-time point cloud streaming via WebSocket integration.",
        tags: &["Visualization", "LiDAR", "WebSocket"],
        media: DemoMedia::Video {
            youtube_id: "4HJDvL2Q6AY",
        },
    },
    DemoEntry {
        title: "Traffic Sign & Vehicle Detection",
        description: "Real-time recognition of road signs and traffic participants.",
        tags: &["YOLOv8", "CNN", "Perception"],
        media: DemoMedia::Image {
            asset: "sign_detection_demo.gif",
        },
    },
    DemoEntry {
        title: "Traffic Light Classification",
        description: "Detecting state changes (Red/Yellow/Green) in dynamic environments.",
        tags: &["Classification", "Real-time"],
        media: DemoMedia::Image {
            asset: "traffic_light_demo.gif",
        },
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelStatus {
    Production,
    Optimization,
}

impl ModelStatus {
    pub fn label(self) -> &'static str {
        match self {
            ModelStatus::Production => "Production",
            ModelStatus::Optimization => "Optimization",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelInfo {
    pub name: &'static str,
    pub task: &'static str,
    pub framework: &'static str,
    pub status: ModelStatus,
}

pub const MODELS: [ModelInfo; 5] = [
    ModelInfo {
        name: "SCNN",
        task: "Lane Detection",
        framework: "PyTorch",
        status: ModelStatus::Production,
    },
    ModelInfo {
        name: "YOLOv8x",
        task: "Object Detection",
        framework: "Ultralytics",
        status: ModelStatus::Production,
    },
    ModelInfo {
        name: "YOLOv8x",
        task: "Sign Detection",
        framework: "Ultralytics",
        status: ModelStatus::Production,
    },
    ModelInfo {
        name: "Custom CNN",
        task: "Sign Classification",
        framework: "Keras/TF",
        status: ModelStatus::Optimization,
    },
    ModelInfo {
        name: "YOLOv8x",
        task: "Traffic Light Det. & Class.",
        framework: "Ultralytics",
        status: ModelStatus::Production,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benchmark {
    pub architecture: &'static str,
    pub task: &'static str,
    pub inference_ms: f64,
}

impl Benchmark {
    pub fn display_time(&self) -> String {
        format!("{:.1} ms", self.inference_ms)
    }
}

pub const BENCHMARKS: [Benchmark; 5] = [
    Benchmark {
        architecture: "YOLOv8x",
        task: "Object Detection (Vehicles/Pedestrians)",
        inference_ms: 12.4,
    },
    Benchmark {
        architecture: "SCNN (VGG16 Backbone)",
        task: "Lane Detection",
        inference_ms: 15.2,
    },
    Benchmark {
        architecture: "YOLOv8x",
        task: "Traffic Sign Detection",
        inference_ms: 11.8,
    },
    Benchmark {
        architecture: "Custom CNN",
        task: "Traffic Sign Classification",
        inference_ms: 2.1,
    },
    Benchmark {
        architecture: "YOLOv8x",
        task: "Traffic Light Det. & Class.",
        inference_ms: 12.1,
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatasetDatum {
    pub name: &'static str,
    pub size: u32,
    pub color: &'static str,
}

pub const DATASETS: [DatasetDatum; 6] = [
    DatasetDatum {
        name: "Mapillary",
        size: 65,
        color: "#2dd4bf",
    },
    DatasetDatum {
        name: "BDD100K",
        size: 90,
        color: "#3b82f6",
    },
    DatasetDatum {
        name: "TUSimple",
        size: 55,
        color: "#fb923c",
    },
    DatasetDatum {
        name: "Euro Signs",
        size: 45,
        color: "#f472b6",
    },
    DatasetDatum {
        name: "DFG Signs",
        size: 40,
        color: "#a855f7",
    },
    DatasetDatum {
        name: "GTSRB",
        size: 35,
        color: "#ec4899",
    },
];

pub fn dataset_chart() -> Vec<ChartDatum> {
    DATASETS
        .iter()
        .map(|d| ChartDatum {
            name: d.name.to_string(),
            value: f64::from(d.size),
            color: d.color.to_string(),
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoadmapStatus {
    Completed,
    InProgress,
    Planned,
    LowPriority,
}

impl RoadmapStatus {
    pub const ALL: [RoadmapStatus; 4] = [
        RoadmapStatus::Completed,
        RoadmapStatus::InProgress,
        RoadmapStatus::Planned,
        RoadmapStatus::LowPriority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RoadmapStatus::Completed => "Complete",
            RoadmapStatus::InProgress => "In Progress",
            RoadmapStatus::Planned => "Planned",
            RoadmapStatus::LowPriority => "Low Priority",
        }
    }

    /// Completed entries are struck through.
    pub fn is_done(self) -> bool {
        self == RoadmapStatus::Completed
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadmapEntry {
    pub text: &'static str,
    pub status: RoadmapStatus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoadmapItem {
    pub category: &'static str,
    pub entries: &'static [RoadmapEntry],
}

const fn entry(text: &'static str, status: RoadmapStatus) -> RoadmapEntry {
    RoadmapEntry { text, status }
}

use RoadmapStatus::{Completed, InProgress, LowPriority, Planned};

pub const ROADMAP: [RoadmapItem; 6] = [
    RoadmapItem {
        category: "Perception",
        entries: &[
            entry("Sign Classification & Detection (CNN / YOLOv8)", Completed),
            entry("Traffic Light Classification & Detection", Completed),
            entry("Lane Detection Fusion (SCNN / CV)", Completed),
            entry("Advanced Lane Detection (OpenCV)", Completed),
            entry("Majority Voting System for CV", Completed),
            entry("Camera Calibration", Completed),
            entry("Blind Spot Monitoring", Planned),
            entry("Real-Time Object Tracking", Planned),
            entry("Improved Dashed Line Handling", Planned),
            entry("Stop/Yield Sign Response Logic", Planned),
            entry("Multi-Lane Detection", Planned),
            entry("Lane Change Logic", Planned),
            entry("Multi-Camera Setup", LowPriority),
            entry("Overtaking & Merging Logic", LowPriority),
        ],
    },
    RoadmapItem {
        category: "Sensor Fusion & Calibration",
        entries: &[
            entry("Integrate Radar", Completed),
            entry("Integrate LiDAR", Completed),
            entry("Multi-Radar Integration (Front + 2 Rear)", Planned),
            entry("Ultrasonic Sensor Integration", Planned),
            entry("LiDAR Object Detection", InProgress),
            entry("Map Matching Algorithm", Planned),
            entry("GPS/IMU Sensor Integration", InProgress),
            entry("SLAM (Simultaneous Localization & Mapping)", LowPriority),
        ],
    },
    RoadmapItem {
        category: "Control & Planning",
        entries: &[
            entry("Vehicle Control (Throttle, Steer, Brake)", Completed),
            entry("PIDF Controller Integration", Completed),
            entry("Adaptive Cruise Control", Completed),
            entry("Emergency Braking / Collision Avoidance", InProgress),
            entry("Blindspot Monitoring (ADAS Module)", Planned),
            entry("Path Planning", Planned),
            entry("Behavior Planning & Anticipation", LowPriority),
            entry("End-to-End Policy Learning (RL)", LowPriority),
            entry("Traffic Participant Prediction", LowPriority),
        ],
    },
    RoadmapItem {
        category: "Simulation & Scenarios",
        entries: &[
            entry("BeamNG.tech Integration", Completed),
            entry("Pipeline Modularization", Completed),
            entry("Lane Detection Tuning", Completed),
            entry("Traffic Scenarios (Heavy/Moderate/Light)", Planned),
            entry("Lighting Condition Testing", Planned),
            entry("RC Car Implementation", LowPriority),
            entry("Docker Containerization", LowPriority),
        ],
    },
    RoadmapItem {
        category: "Visualization & Logging",
        entries: &[
            entry("Foxglove Visualization Integration", Completed),
            entry("Modular YAML Configuration", Completed),
            entry("Real-time Telemetry Logging", Completed),
            entry("Real-time Annotations Overlay", InProgress),
        ],
    },
    RoadmapItem {
        category: "Documentation",
        entries: &[
            entry("Demo Images & Videos", Completed),
            entry("Table of Contents", Completed),
            entry("Performance Benchmarks Section", Planned),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "How do I set up the simulation environment?",
        answer: "Setup requires Python 3.8+ and a licensed copy of BeamNG.tech. You'll need to install the dependencies via `pip install -r requirements.txt` and configure the BeamNG bridge. Detailed step-by-step instructions are available in the GitHub repository's README.",
    },
    FaqEntry {
        question: "What are the future plans for VisionPilot?",
        answer: "The roadmap includes integrating SLAM for localization, implementing reinforcement learning for end-to-end driving policies, and eventually testing the stack on a physical RC car platform to validate the sim-to-real transfer.",
    },
    FaqEntry {
        question: "Why use BeamNG.tech instead of CARLA or AirSim?",
        answer: "BeamNG.tech offers superior soft-body physics, which introduces realistic sensor noise, vibration, and vehicle dynamics handling. This forces the control algorithms to be more robust compared to rigid-body simulators.",
    },
    FaqEntry {
        question: "Can I contribute to the project?",
        answer: "Absolutely! The project is open-source. We welcome pull requests for new feature implementations, bug fixes, or documentation improvements. Check the contribution guidelines on GitHub.",
    },
];

pub const CREDITS: [&str; 4] = [
    "BeamNG.tech",
    "Kaggle (GPU Resources)",
    "CU Lane / BDD100K Datasets",
    "Foxglove Studio",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_landing_ctas() {
        assert_eq!(SIMULATION_CTA.page, Page::Demos);
        assert_eq!(SIMULATION_CTA.label, "Watch Simulation Demos");
        assert_eq!(ARCHITECTURE_CTA.page, Page::Technical);
    }

    #[test]
    fn test_fusion_sensors_are_distinct() {
        let legends: HashSet<_> = FUSION_SENSORS.iter().map(|s| s.legend).collect();
        let colors: HashSet<_> = FUSION_SENSORS.iter().map(|s| s.color).collect();
        assert_eq!(legends.len(), 3);
        assert_eq!(colors.len(), 3);
    }

    #[test]
    fn test_demo_media() {
        let videos = DEMOS
            .iter()
            .filter(|d| matches!(d.media, DemoMedia::Video { .. }))
            .count();
        assert_eq!(videos, 2);
        assert_eq!(
            DEMOS[0].media.embed_url().as_deref(),
            Some("https://www.youtube.com/embed/7eA_XfIkLWQ?autoplay=1")
        );
        assert_eq!(DEMOS[2].media.embed_url(), None);
        assert_eq!(DEMOS[3].media.thumbnail_url(), None);
    }

    #[test]
    fn test_roadmap_categories_are_unique_and_non_empty() {
        let categories: HashSet<&str> = ROADMAP.iter().map(|r| r.category).collect();
        assert_eq!(categories.len(), ROADMAP.len());
        assert!(ROADMAP.iter().all(|r| !r.entries.is_empty()));
        assert!(RoadmapStatus::Completed.is_done());
        assert!(!RoadmapStatus::InProgress.is_done());
    }

    #[test]
    fn test_roadmap_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&RoadmapStatus::LowPriority).unwrap(),
            "\"low-priority\""
        );
        assert_eq!(
            serde_json::to_string(&RoadmapStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }

    #[test]
    fn test_dataset_chart_keeps_order() {
        let chart = dataset_chart();
        let names: Vec<&str> = chart.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, DATASETS.iter().map(|d| d.name).collect::<Vec<_>>());
        assert_eq!(chart[1].value, 90.0);
    }

    #[test]
    fn test_benchmark_formatting() {
        assert_eq!(BENCHMARKS[3].display_time(), "2.1 ms");
        assert_eq!(BENCHMARKS[1].display_time(), "15.2 ms");
    }
}
