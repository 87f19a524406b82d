//! Traversal tests for ObservationsClient against a mock observations API.

use serde_json::json;
use smhi::{ObservationsClient, ObservationsError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SERVICE_PATH: &str = "/api/version/1.0.json";

fn link(uri: &str, path: &str, content_type: &str) -> serde_json::Value {
    json!({"rel": "data", "type": content_type, "href": format!("{uri}{path}")})
}

fn station(uri: &str, name: &str, key: &str, lat: f64, lon: f64, active: bool) -> serde_json::Value {
    json!({
        "name": name,
        "owner": "SMHI",
        "ownerCategory": "CLIM",
        "id": key.parse::<i64>().unwrap(),
        "height": 73.0,
        "latitude": lat,
        "longitude": lon,
        "active": active,
        "from": -2208988800000i64,
        "to": 1633086000000i64,
        "key": key,
        "updated": 1633086000000i64,
        "title": format!("Station {name}"),
        "summary": "",
        "link": [link(uri, &format!("/station/{key}.json"), "application/json")]
    })
}

fn json_value() -> serde_json::Value {
    json!({
        "value": [
            {"date": 1633082400000i64, "value": "11.2", "quality": "G"},
            {"date": 1633086000000i64, "value": "11.9", "quality": "G"}
        ],
        "updated": 1633086000000i64,
        "parameter": {"key": "1", "name": "Lufttemperatur", "summary": "momentanvärde, 1 gång/tim", "unit": "degree celsius"},
        "station": {"key": "53431", "name": "Lund Sol", "owner": "SMHI", "ownerCategory": "CLIM", "height": 73.0},
        "period": {"key": "latest-hour", "from": 1633082400001i64, "to": 1633086000000i64, "summary": "", "sampling": "1 timme"},
        "position": [{"from": -2208988800000i64, "to": 1633086000000i64, "height": 73.0, "latitude": 55.71, "longitude": 13.21}],
        "link": []
    })
}

const CSV_BODY: &str = "Stationsnamn;Klimatnummer;Mäthöjd (meter över marken)\n\
Helsingborg A;62040;2.0\n\
\n\
Parameternamn;Beskrivning;Enhet\n\
Lufttemperatur;momentanvärde, 1 gång/tim;degree celsius\n\
\n\
Tidsperiod (fr.o.m);Tidsperiod (t.o.m);Höjd (meter över havet);Latitud (decimalgrader);Longitud (decimalgrader)\n\
2021-10-01 10:00:01;2021-10-01 11:00:00;24.0;56.04;12.69\n\
\n\
Datum;Tid (UTC);Lufttemperatur;Kvalitet\n\
2021-10-01;10:00:00;10.4;G\n\
2021-10-01;10:30:00\n\
2021-10-01;11:00:00;10.9;G\n";

/// Mounts service -> resource "1" -> stations -> periods -> period details.
/// `data_links` are the links of the single period data entry.
async fn mount_graph(server: &MockServer, data_links: serde_json::Value) {
    let uri = server.uri();

    Mock::given(method("GET"))
        .and(path(SERVICE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "1.0",
            "updated": 1633086000000i64,
            "title": "Meteorologiska observationer",
            "summary": "",
            "link": [],
            "resource": [
                {
                    "key": "4",
                    "title": "Vindhastighet",
                    "summary": "",
                    "link": [link(&uri, "/parameter/4.json", "application/json")]
                },
                {
                    "key": "1",
                    "updated": 1633086000000i64,
                    "title": "Lufttemperatur",
                    "summary": "momentanvärde, 1 gång/tim",
                    "geoBox": {"minLatitude": 55.0, "minLongitude": 10.0, "maxLatitude": 69.0, "maxLongitude": 25.0},
                    "link": [
                        link(&uri, "/parameter/1.atom", "application/atom+xml"),
                        link(&uri, "/parameter/1.json", "application/json")
                    ]
                }
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/parameter/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "1",
            "title": "Lufttemperatur",
            "summary": "",
            "valueType": "SAMPLING",
            "station": [
                station(&uri, "Lund", "53430", 55.7, 13.2, false),
                station(&uri, "Lund Sol", "53431", 55.71, 13.21, true),
                station(&uri, "Helsingborg A", "62040", 56.04, 12.69, true)
            ]
        })))
        .mount(server)
        .await;

    for key in ["53431", "62040"] {
        Mock::given(method("GET"))
            .and(path(format!("/station/{key}.json")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "key": key,
                "title": "Lufttemperatur",
                "owner": "SMHI",
                "ownerCategory": "CLIM",
                "active": true,
                "summary": "",
                "from": -2208988800000i64,
                "to": 1633086000000i64,
                "position": [],
                "period": [
                    {"key": "corrected-archive", "summary": "", "link": [link(&uri, "/period/archive.json", "application/json")]},
                    {"key": "latest-hour", "summary": "", "link": [link(&uri, "/period/latest-hour.json", "application/json")]}
                ],
                "link": []
            })))
            .mount(server)
            .await;
    }

    Mock::given(method("GET"))
        .and(path("/period/latest-hour.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "latest-hour",
            "title": "",
            "summary": "",
            "from": 1633082400001i64,
            "to": 1633086000000i64,
            "link": [],
            "data": [
                {"key": null, "updated": 1633086000000i64, "title": "", "summary": "", "link": data_links}
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/period/archive.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "corrected-archive",
            "title": "",
            "summary": "",
            "link": [],
            "data": []
        })))
        .mount(server)
        .await;
}

fn client(server: &MockServer) -> ObservationsClient {
    ObservationsClient::with_base_url(
        reqwest::Client::new(),
        format!("{}/api/version/1.0", server.uri()),
    )
}

#[tokio::test]
async fn by_station_name_decodes_json_value() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_graph(
        &server,
        json!([
            link(&uri, "/data.csv", "text/plain"),
            link(&uri, "/data.json", "application/json")
        ]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json_value()))
        .expect(1)
        .mount(&server)
        .await;

    let value = client(&server)
        .by_station_name("LUND")
        .parameter("1")
        .period("latest-hour")
        .call()
        .await
        .unwrap();

    assert_eq!(value.station.key, "53431");
    assert_eq!(value.value.len(), 2);
    assert_eq!(value.value[1].value, "11.9");
}

#[tokio::test]
async fn by_coordinates_falls_back_to_csv() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_graph(&server, json!([link(&uri, "/data.csv", "text/plain")])).await;
    Mock::given(method("GET"))
        .and(path("/data.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CSV_BODY))
        .mount(&server)
        .await;

    let value = client(&server)
        .by_coordinates(56.05, 12.7)
        .parameter("1")
        .call()
        .await
        .unwrap();

    assert_eq!(value.station.name, "Helsingborg A");
    assert_eq!(value.parameter.key, "1");
    assert_eq!(value.period.key, "latest-hour");
    let readings: Vec<_> = value.value.iter().map(|r| r.value.as_str()).collect();
    assert_eq!(readings, ["10.4", "10.9"]);
    assert_eq!(value.link[0].href, format!("{uri}/data.csv"));
}

#[tokio::test]
async fn unknown_parameter_is_missing_resource() {
    let server = MockServer::start().await;
    mount_graph(&server, json!([])).await;

    let err = client(&server)
        .by_station_name("lund")
        .parameter("99")
        .call()
        .await
        .unwrap_err();
    assert!(matches!(err, ObservationsError::MissingResource(key) if key == "99"));
}

#[tokio::test]
async fn no_matching_station() {
    let server = MockServer::start().await;
    mount_graph(&server, json!([])).await;

    let err = client(&server)
        .by_station_name("kiruna")
        .parameter("1")
        .call()
        .await
        .unwrap_err();
    assert!(matches!(err, ObservationsError::MissingStation(_)));
}

#[tokio::test]
async fn unknown_period_is_missing_period() {
    let server = MockServer::start().await;
    mount_graph(&server, json!([])).await;

    let err = client(&server)
        .by_station_name("lund")
        .parameter("1")
        .period("latest-months")
        .call()
        .await
        .unwrap_err();
    assert!(matches!(err, ObservationsError::MissingPeriod(key) if key == "latest-months"));
}

#[tokio::test]
async fn empty_period_is_missing_period_data() {
    let server = MockServer::start().await;
    mount_graph(&server, json!([])).await;

    let err = client(&server)
        .by_station_name("lund")
        .parameter("1")
        .period("corrected-archive")
        .call()
        .await
        .unwrap_err();
    assert!(matches!(err, ObservationsError::MissingPeriodData(_)));
}

#[tokio::test]
async fn data_without_json_or_csv_is_no_matching_link() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_graph(&server, json!([link(&uri, "/data.xml", "application/xml")])).await;

    let err = client(&server)
        .by_station_name("lund")
        .parameter("1")
        .call()
        .await
        .unwrap_err();
    assert!(matches!(err, ObservationsError::NoMatchingLink(_)));
}

#[tokio::test]
async fn http_errors_carry_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVICE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client(&server).service().await.unwrap_err();
    match err {
        ObservationsError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 503),
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(SERVICE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"key\": "))
        .mount(&server)
        .await;

    let err = client(&server).service().await.unwrap_err();
    assert!(matches!(err, ObservationsError::JsonParse { .. }));
}

#[tokio::test]
async fn malformed_csv_fails_with_section_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    mount_graph(&server, json!([link(&uri, "/data.csv", "text/plain")])).await;
    Mock::given(method("GET"))
        .and(path("/data.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "Stationsnamn;Klimatnummer;Mäthöjd\nHelsingborg A;62040;2.0\nDatum;Tid (UTC);Lufttemperatur;Kvalitet\n",
        ))
        .mount(&server)
        .await;

    let err = client(&server)
        .by_station_name("helsingborg")
        .parameter("1")
        .call()
        .await
        .unwrap_err();
    assert!(matches!(err, ObservationsError::InvalidParameterData));
}
