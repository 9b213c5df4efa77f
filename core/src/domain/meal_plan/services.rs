use tracing::{error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal_plan::{
        entities::WeeklyPlan, ports::MealPlanService, prompts::build_meal_plan_prompt,
        schema::get_weekly_plan_schema, value_objects::GenerateMealPlanInput,
    },
    product_analysis::ports::{LLMClient, ProductSource},
    storage::ports::ClientStateRepository,
};

impl<PS, LLM, ST> MealPlanService for Service<PS, LLM, ST>
where
    PS: ProductSource,
    LLM: LLMClient,
    ST: ClientStateRepository,
{
    #[instrument(skip(self, input))]
    async fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<WeeklyPlan, CoreError> {
        let prompt = {
            let state = self.state.read().await;
            build_meal_plan_prompt(&input, &state.history.product_names())
        };

        let raw_response = self
            .llm_client
            .generate_with_schema(prompt, get_weekly_plan_schema())
            .await
            .map_err(|e| {
                error!("Meal plan generation call failed: {}", e);
                CoreError::GenerationFailed
            })?;

        let plan = serde_json::from_str::<WeeklyPlan>(&raw_response)
            .map_err(|e| {
                error!("Failed to parse meal plan response: {}", e);
                CoreError::GenerationFailed
            })?
            .validate()?;

        self.state.write().await.latest_meal_plan = Some(plan.clone());

        info!(
            shopping_items = plan.shopping_list.len(),
            "Meal plan generated"
        );
        Ok(plan)
    }

    async fn get_latest_meal_plan(&self) -> Result<Option<WeeklyPlan>, CoreError> {
        Ok(self.state.read().await.latest_meal_plan.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        meal_plan::entities::{Weekday, tests::plan_for},
        product_analysis::{
            entities::ProductAnalysis,
            ports::{MockLLMClient, MockProductSource},
        },
        storage::ports::{MockClientStateRepository, tests::repository_with},
    };
    use std::collections::BTreeMap;

    fn input() -> GenerateMealPlanInput {
        GenerateMealPlanInput {
            health_goals: "Build muscle".to_string(),
            favorite_foods: "Chicken".to_string(),
            dietary_restrictions: "None".to_string(),
        }
    }

    fn scanned(id: &str, name: &str) -> ProductAnalysis {
        ProductAnalysis {
            id: id.to_string(),
            barcode: Some(id.to_string()),
            product_name: name.to_string(),
            image_url: "https://img".to_string(),
            score: 50,
            recommendation: "r".to_string(),
            organized_data: BTreeMap::new(),
            sources: None,
        }
    }

    fn answering(
        expected_fragment: &'static str,
        response: Result<String, CoreError>,
    ) -> MockLLMClient {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_schema()
            .times(1)
            .withf(move |prompt, _| prompt.contains(expected_fragment))
            .returning(move |_, _| {
                let response = response.clone();
                Box::pin(async move { response })
            });
        llm
    }

    async fn service(
        llm: MockLLMClient,
        history: Vec<ProductAnalysis>,
    ) -> Service<MockProductSource, MockLLMClient, MockClientStateRepository> {
        Service::new(MockProductSource::new(), llm, repository_with(history, None)).await
    }

    #[tokio::test]
    async fn test_empty_history_yields_seven_distinct_days() {
        let response = serde_json::to_string(&plan_for(&Weekday::ALL)).unwrap();
        let llm = answering("The user has not scanned any items yet.", Ok(response));
        let service = service(llm, vec![]).await;

        let plan = service.generate_meal_plan(input()).await.unwrap();

        let days: Vec<Weekday> = plan.weekly_plan.iter().map(|d| d.day).collect();
        assert_eq!(days, Weekday::ALL.to_vec());
        assert_eq!(
            service.get_latest_meal_plan().await.unwrap(),
            Some(plan)
        );
    }

    #[tokio::test]
    async fn test_history_names_feed_the_prompt() {
        let response = serde_json::to_string(&plan_for(&Weekday::ALL)).unwrap();
        let llm = answering("Greek Yogurt, Nutella.", Ok(response));
        let history = vec![scanned("2", "Greek Yogurt"), scanned("1", "Nutella")];
        let service = service(llm, history).await;

        assert!(service.generate_meal_plan(input()).await.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_week_is_generation_failure() {
        let response = serde_json::to_string(&plan_for(&Weekday::ALL[..5])).unwrap();
        let service = service(answering("Build muscle", Ok(response)), vec![]).await;

        let result = service.generate_meal_plan(input()).await;

        assert_eq!(result, Err(CoreError::GenerationFailed));
        assert_eq!(service.get_latest_meal_plan().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_transport_and_parse_errors_are_generation_failures() {
        for response in [
            Err(CoreError::ExternalServiceError("quota".to_string())),
            Ok("not json".to_string()),
        ] {
            let service = service(answering("Chicken", response), vec![]).await;

            let result = service.generate_meal_plan(input()).await;

            assert_eq!(result, Err(CoreError::GenerationFailed));
        }
    }
}
