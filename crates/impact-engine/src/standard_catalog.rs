//! Built-in lifestyle changes with their annual CO2e savings.
//!
//! All weights are annual savings in kilograms of CO2e.
//!
//! Sources:
//! - Flights: myclimate flight calculator, Carbon Independent. The
//!   Sydney-London figure includes radiative forcing.
//! - Diet: Scarborough et al. (2014), Climatic Change; Our World in Data;
//!   Energy Saving Trust UK.
//! - Transport: Wynes & Nicholas (2017), Environmental Research Letters;
//!   World Resources Institute.
//! - Home energy: Carbon Brief; US EPA household carbon footprint calculator.

/// Static description of one built-in lifestyle change.
pub(crate) struct StandardChange {
    pub(crate) id: &'static str,
    pub(crate) name: &'static str,
    pub(crate) annual_kg: u32,
    pub(crate) description: &'static str,
    pub(crate) source: &'static str,
}

/// Built-in changes in display order. Identifiers are unique.
pub(crate) const STANDARD_CHANGES: [StandardChange; 10] = [
    StandardChange {
        id: "flight_syd_lon",
        name: "Avoid one Sydney-London round-trip flight per year",
        annual_kg: 4500,
        description: "Long-haul flights are among the most carbon-intensive activities. \
                      A round-trip economy flight Sydney-London produces ~4,500 kg CO2e \
                      (including radiative forcing effects at altitude).",
        source: "myclimate, Carbon Independent",
    },
    StandardChange {
        id: "reduce_meat",
        name: "Reduce meat consumption to 2 meals per week",
        annual_kg: 920,
        description: "Reducing from a typical Western diet (~7-10 meat meals/week) to just \
                      2 meals per week saves significant emissions from livestock farming, \
                      feed production, and land use.",
        source: "Scarborough et al. (2014), Energy Saving Trust UK",
    },
    StandardChange {
        id: "eliminate_dairy",
        name: "Eliminate dairy consumption",
        annual_kg: 420,
        description: "Dairy production generates methane from cattle and requires significant \
                      land and water. Switching to plant-based alternatives reduces emissions.",
        source: "Our World in Data, Poore & Nemecek (2018)",
    },
    StandardChange {
        id: "go_car_free",
        name: "Go car-free (give up personal vehicle)",
        annual_kg: 2400,
        description: "Eliminating car ownership and switching to public transit, cycling, \
                      or walking. Based on average car usage of ~12,000 km/year.",
        source: "Wynes & Nicholas (2017), WRI",
    },
    StandardChange {
        id: "switch_ev",
        name: "Switch from petrol/diesel car to electric vehicle",
        annual_kg: 2000,
        description: "EVs produce zero direct emissions and lower lifecycle emissions, \
                      especially when charged with renewable energy. Savings depend on \
                      local electricity grid mix.",
        source: "IEA, EPA",
    },
    StandardChange {
        id: "renewable_energy",
        name: "Switch home to 100% renewable energy",
        annual_kg: 1500,
        description: "Switching electricity provider to certified renewable sources or \
                      installing solar panels eliminates emissions from fossil fuel \
                      electricity generation.",
        source: "Carbon Brief, EPA",
    },
    StandardChange {
        id: "cycle_commute",
        name: "Cycle instead of drive for daily commute",
        annual_kg: 500,
        description: "Replacing one car trip per day (~10 km average) with cycling. \
                      Also provides health benefits and reduces traffic congestion.",
        source: "European Cyclists' Federation, ITF",
    },
    StandardChange {
        id: "short_flight",
        name: "Avoid one short-haul flight per year (take train instead)",
        annual_kg: 500,
        description: "Short flights (1-3 hours) have disproportionately high emissions \
                      due to takeoff/landing. Trains produce 5-10x fewer emissions.",
        source: "EEA, Eurostar",
    },
    StandardChange {
        id: "reduce_food_waste",
        name: "Reduce food waste by 50%",
        annual_kg: 300,
        description: "The average household wastes ~30% of food purchased. Reducing waste \
                      saves emissions from production, transport, and landfill methane.",
        source: "Project Drawdown, WRAP UK",
    },
    StandardChange {
        id: "energy_efficiency",
        name: "Adopt energy-efficient home practices",
        annual_kg: 300,
        description: "LED lighting, efficient appliances, smart thermostats, reducing \
                      standby power, and better insulation. Can cut home energy use by 30%.",
        source: "Energy Saving Trust, DOE",
    },
];
