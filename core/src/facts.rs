//! Educational air quality facts posted outside the sensor advisory windows.

pub const FACTS: &[&str] = &[
    "PM2.5 refers to tiny particles smaller than 2.5µm, small enough to penetrate deep into your lungs.",
    "PM10 particles are larger than PM2.5 but can still cause respiratory irritation and health issues.",
    "NO2 (Nitrogen Dioxide) is produced by vehicle exhaust and industrial emissions and can worsen asthma.",
    "Fine particulate matter like PM2.5 can enter your bloodstream and affect heart health.",
    "NO (Nitric Oxide) comes mostly from combustion and quickly reacts in the air to form NO2.",
    "High levels of PM10 can cause discomfort and respiratory issues, especially in vulnerable individuals.",
    "Exposure to NO2 can reduce lung function and increase susceptibility to respiratory infections.",
    "Air quality readings often emphasize PM2.5 due to its high potential for harm.",
    "Particulate matter pollution is linked to cardiovascular diseases and reduced life expectancy.",
    "PM2.5 is commonly generated by burning fossil fuels such as coal, oil, and wood.",
    "DEFRA thresholds for PM2.5 are: moderate >12 µg/m³, high >24 µg/m³, and emergency >36 µg/m³.",
    "WHO guidelines recommend stricter limits for PM2.5: an annual average <5 µg/m³ and a daily limit <15 µg/m³.",
    "DEFRA thresholds for PM10 are: moderate >17 µg/m³, high >34 µg/m³, and emergency >50 µg/m³.",
    "WHO suggests that PM10 should not exceed 45 µg/m³ daily to maintain safe air quality.",
    "DEFRA thresholds for NO2 are: moderate >67 µg/m³, high >134 µg/m³, and emergency >200 µg/m³.",
    "DEFRA standards are tailored for UK conditions, reflecting local air quality challenges.",
    "WHO thresholds are based on comprehensive global research aimed at protecting public health.",
    "Emergency air pollution levels signal an immediate health risk requiring urgent action.",
    "DEFRA's guidelines help translate pollutant levels into actionable public health advice.",
    "WHO's stricter thresholds underline the importance of reducing long-term pollution exposure.",
    "Long-term exposure to PM2.5 can increase the risk of heart disease, stroke, and lung cancer.",
    "Poor air quality may aggravate asthma symptoms and cause respiratory irritation.",
    "High NO2 levels are linked to reduced lung function and a higher risk of bronchitis.",
    "Children are especially vulnerable to air pollution due to their developing lungs.",
    "Exposure to elevated pollutant levels during pregnancy can lead to complications like low birth weight.",
    "Air pollution has been associated with mental health issues such as anxiety and depression.",
    "Chronic exposure to pollutants worsens respiratory conditions like COPD.",
    "Long-term exposure to air pollution has been linked to reduced cognitive function in older adults.",
    "Poor air quality weakens respiratory defenses, increasing the risk of infections.",
    "High pollution days can trigger symptoms such as headaches, fatigue, and shortness of breath.",
    "Reduce exposure by staying indoors on high pollution days and keeping windows closed.",
    "Using an air purifier with a HEPA filter can markedly improve indoor air quality.",
    "Wearing an N95 mask can help block dangerous particles like PM2.5 during outdoor exposure.",
    "Avoid vigorous outdoor exercise during peak pollution hours to protect your lungs.",
    "Indoor plants such as spider plants and aloe vera can help freshen indoor air.",
    "Monitor air quality apps to plan your outings during periods of lower pollution.",
    "Ensure proper home ventilation during low pollution periods to clear indoor pollutants.",
    "Staying well hydrated may help your body cope with the effects of pollutants.",
    "On high pollution days, opt for indoor activities, especially for children and the elderly.",
    "Avoid heavily trafficked areas to minimize exposure to vehicle emissions.",
    "Burning fossil fuels releases both greenhouse gases and the particles that harm our lungs.",
    "Smog is more prevalent in winter months due to higher fossil fuel consumption for heating.",
    "Urban greenery, such as trees and parks, helps filter pollutants from the air.",
    "Industrial sources, including power plants, are major contributors to PM2.5 emissions.",
    "Vehicle emissions, particularly from diesel engines, are a leading source of NO2.",
    "Air quality can be significantly worse in valleys where pollutants may become trapped.",
    "Wildfires can cause dramatic spikes in particulate matter, affecting distant regions.",
    "Indoor pollution from cooking or smoking can be as harmful as outdoor air pollution.",
    "Rainfall can temporarily improve air quality by washing pollutants from the atmosphere.",
    "Transitioning to renewable energy sources, like wind and solar, helps reduce emissions.",
];

pub fn pick_fact(rng: &mut fastrand::Rng) -> &'static str {
    FACTS[rng.usize(..FACTS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_known_fact() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..20 {
            assert!(FACTS.contains(&pick_fact(&mut rng)));
        }
    }

    #[test]
    fn same_seed_same_fact() {
        let a = pick_fact(&mut fastrand::Rng::with_seed(42));
        let b = pick_fact(&mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }
}
