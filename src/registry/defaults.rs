//! The stock big data stack DELoc ships with

use super::models::{ComponentStatus, NewComponent};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

/// Docker network every default component joins
pub const DEFAULT_NETWORK: &str = "bigdata_network";

fn created(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn running(
    name: &str,
    display_name: &str,
    description: &str,
    icon: &str,
    container_id: &str,
    image: &str,
    ports: &[&str],
    volumes: &[&str],
    created_at: Option<DateTime<Utc>>,
    uptime: &str,
    cpu_usage: u32,
    memory_usage: &str,
    order: u32,
    configuration: serde_json::Value,
) -> NewComponent {
    NewComponent {
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        status: ComponentStatus::Running,
        container_id: Some(container_id.to_string()),
        image: image.to_string(),
        ports: strings(ports),
        volumes: strings(volumes),
        network_name: Some(DEFAULT_NETWORK.to_string()),
        created_at,
        uptime: Some(uptime.to_string()),
        cpu_usage: Some(cpu_usage),
        memory_usage: Some(memory_usage.to_string()),
        enabled: true,
        order,
        configuration,
    }
}

/// Spark, MinIO, Hive, HBase, Airflow, Kafka, Flink, Beam and Cassandra, in sidebar order.
pub fn default_components() -> Vec<NewComponent> {
    let hive = NewComponent {
        name: "hive".to_string(),
        display_name: "Apache Hive".to_string(),
        description: "Data warehouse software for reading, writing, and managing data".to_string(),
        icon: "dns".to_string(),
        status: ComponentStatus::Stopped,
        container_id: None,
        image: "apache/hive:3.1.2".to_string(),
        ports: strings(&["10000:10000", "10002:10002"]),
        volumes: strings(&["/data/hive:/opt/hive/data"]),
        network_name: Some(DEFAULT_NETWORK.to_string()),
        created_at: None,
        uptime: None,
        cpu_usage: Some(0),
        memory_usage: Some("0 MB".to_string()),
        enabled: false,
        order: 3,
        configuration: json!({ "metastoreUri": "thrift://hive-metastore:9083" }),
    };

    let mut flink = running(
        "flink",
        "Apache Flink",
        "Stream processing framework for distributed, high-performance data streaming",
        "git-branch",
        "9d7fe2a31c8b4d5e6f7g8h9i0j1k2l3m",
        "flink:latest",
        &["8081:8081"],
        &["/data/flink:/opt/flink/data"],
        created(2023, 5, 17, 6, 40),
        "6h 42m",
        18,
        "2.1 GB",
        7,
        json!({ "taskManagers": 2, "parallelism": 4 }),
    );
    flink.status = ComponentStatus::Warning;

    vec![
        running(
            "spark",
            "Apache Spark",
            "Unified analytics engine for large-scale data processing",
            "zap",
            "8a3dcb7fe49a5c21d8e47f92b13a45fd",
            "apache/spark:3.3.0",
            &["7077:7077", "8080:8080", "4040:4040"],
            &["/data/spark:/opt/spark/data"],
            created(2023, 5, 15, 9, 42),
            "2d 14h 32m",
            12,
            "1.2 GB",
            1,
            json!({ "workers": 3, "executorMemory": "2g" }),
        ),
        running(
            "minio",
            "Minio",
            "High performance object storage server",
            "storage",
            "7e5fd3c92b123eaf456b789cd01234ef",
            "minio/minio:latest",
            &["9000:9000", "9001:9001"],
            &["/data/minio:/data"],
            created(2023, 5, 10, 15, 18),
            "5d 8h 14m",
            5,
            "420 MB",
            2,
            json!({ "accessKey": "minioadmin", "secretKey": "minioadmin" }),
        ),
        hive,
        running(
            "hbase",
            "Apache HBase",
            "Distributed, scalable, big data store",
            "view_column",
            "1a2b3c4d5e6f7g8h9i0j1k2l3m4n5o6p7",
            "harisekhon/hbase:latest",
            &["16000:16000", "16010:16010"],
            &["/data/hbase:/data"],
            created(2023, 5, 12, 10, 20),
            "3d 18h 12m",
            8,
            "820 MB",
            4,
            json!({ "zookeeperQuorum": "zookeeper:2181" }),
        ),
        running(
            "airflow",
            "Apache Airflow",
            "Platform to programmatically author, schedule and monitor workflows",
            "schedule",
            "9z8y7x6w5v4u3t2s1r0q9p8o7n6m5l4k",
            "apache/airflow:2.5.1",
            &["8080:8080"],
            &["/data/airflow:/opt/airflow"],
            created(2023, 5, 14, 8, 15),
            "1d 16h 27m",
            10,
            "1.5 GB",
            5,
            json!({ "executor": "LocalExecutor" }),
        ),
        running(
            "kafka",
            "Apache Kafka",
            "Distributed event streaming platform",
            "swap_horiz",
            "5a4s3d2f1g6h7j8k9l0z1x2c3v4b5n6m",
            "confluentinc/cp-kafka:7.3.0",
            &["9092:9092"],
            &["/data/kafka:/var/lib/kafka/data"],
            created(2023, 5, 11, 12, 30),
            "4d 11h 52m",
            7,
            "950 MB",
            6,
            json!({ "brokers": 1, "topics": 5 }),
        ),
        flink,
        running(
            "beam",
            "Apache Beam",
            "Unified programming model for batch and streaming data processing",
            "layers",
            "beam1a2b3c4d5e6f7g8h9i0j1k2l",
            "apache/beam:2.40.0",
            &["8088:8088"],
            &["/data/beam:/beam-data"],
            created(2023, 5, 16, 10, 30),
            "1d 2h 12m",
            14,
            "1.7 GB",
            8,
            json!({ "runner": "DirectRunner" }),
        ),
        running(
            "cassandra",
            "Apache Cassandra",
            "Highly-scalable, distributed NoSQL database",
            "database",
            "cassandra3e4d5f6g7h8i9j0k1l2m",
            "cassandra:4.0.5",
            &["9042:9042", "7000:7000"],
            &["/data/cassandra:/var/lib/cassandra"],
            created(2023, 5, 15, 14, 25),
            "1d 22h 35m",
            22,
            "3.2 GB",
            9,
            json!({ "seeds": "cassandra-seed", "clusterName": "BigDataCluster" }),
        ),
    ]
}
