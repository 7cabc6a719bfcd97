//! MCP tool definitions for the crawler service.
//!
//! Two operations are registered on the tool router: a weather stub and
//! the housing-subscription crawl. Tool arguments get their JSON schema
//! from `schemars` derives; pipeline errors surface as MCP internal
//! errors carrying the typed error message.

use std::future::Future;
use std::sync::Arc;

use applyhome_crawler::{ApplyHomeCrawler, CrawlerConfig};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars::{self, JsonSchema},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Deserialize;

/// Fixed sentinel the weather stub always reports.
const WEATHER_ALWAYS_CLEAR: &str = "맑음";

/// Arguments for the weather stub.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct WeatherArgs {
    /// Region name as the user said it (e.g. "서울", "인천")
    pub region: String,
}

/// Arguments for the subscription crawl.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CrawlArgs {
    /// Housing category: "전체", "아파트", "민간사전청약아파트",
    /// "민간임대오피스텔" or "공공지원민간임대"
    pub house_type: String,
    /// Region: "전체", a canonical region name (e.g. "서울특별시",
    /// "부산광역시"), or a free-text place name
    pub jiyeok: String,
}

/// MCP service exposing the weather stub and the subscription crawler.
#[derive(Clone)]
pub struct CrawlerService {
    crawler: Arc<ApplyHomeCrawler>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl CrawlerService {
    pub fn new(config: &CrawlerConfig) -> applyhome_crawler::Result<Self> {
        Ok(Self {
            crawler: Arc::new(ApplyHomeCrawler::new(config)?),
            tool_router: Self::tool_router(),
        })
    }

    #[tool(
        description = "대한민국 특정 지역의 날씨를 알려주는 tool 입니다. 항상 맑음을 반환합니다."
    )]
    async fn get_weather(
        &self,
        Parameters(args): Parameters<WeatherArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(region = %args.region, "Weather stub invoked");
        Ok(CallToolResult::success(vec![Content::text(
            WEATHER_ALWAYS_CLEAR,
        )]))
    }

    #[tool(
        description = "대한민국의 아파트 청약, 민간사전청약아파트, 민간임대오피스텔, 공공지원민간임대 모집 정보를 수집하는 tool입니다. house_type으로 유형을, jiyeok으로 지역을 좁힙니다. 특정할 수 없으면 '전체'를 사용하세요."
    )]
    async fn get_applyhome_crawl_result(
        &self,
        Parameters(args): Parameters<CrawlArgs>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            house_type = %args.house_type,
            jiyeok = %args.jiyeok,
            "Crawl tool invoked"
        );

        let results = self
            .crawler
            .crawl(&args.house_type, &args.jiyeok)
            .await
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;

        let json = serde_json::to_string(&results)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for CrawlerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "crawler".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "한국 주택청약 조회 도구입니다. get_weather는 날씨 스텁이고, \
                 get_applyhome_crawl_result는 청약홈 캘린더를 수집해 유형과 지역으로 \
                 필터링한 공고 목록을 반환합니다."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_service() -> CrawlerService {
        let config = CrawlerConfig {
            juso_api_key: SecretString::from("juso-test-key".to_string()),
            ncp_api_key_id: SecretString::from("ncp-test-id".to_string()),
            ncp_api_key: SecretString::from("ncp-test-key".to_string()),
        };
        CrawlerService::new(&config).unwrap()
    }

    #[tokio::test]
    async fn weather_stub_always_reports_clear() {
        let service = test_service();
        let result = service
            .get_weather(Parameters(WeatherArgs {
                region: "서울".to_string(),
            }))
            .await
            .unwrap();

        let text = result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.as_str());
        assert_eq!(text, Some("맑음"));
    }

    #[test]
    fn router_registers_both_tools() {
        let router = CrawlerService::tool_router();
        let names: Vec<String> = router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();

        assert!(names.contains(&"get_weather".to_string()));
        assert!(names.contains(&"get_applyhome_crawl_result".to_string()));
    }
}
